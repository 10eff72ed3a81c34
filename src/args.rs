use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

pub const DEFAULT_CONTENT: &str = "https://example.com/index.html?id=ABC12345678&mode=local";
pub const DEFAULT_CODE: &str = "ABC12345678";

const EXAMPLES: &str = "\
Examples:
  QR Code Generation:
    qrimzn --type=qrcode --content=\"https://example.com\" --code=\"ABC123\" > card.png
    qrimzn --code=\"ABC12345678\" > card.png (default type is qrcode)

  Image Resizing:
    qrimzn --type=resize --width=400 < input.jpg > output.png
    cat image.png | qrimzn --type=resize --width=1200 > resized.png";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationType {
    /// Render a QR code card with a label to stdout
    Qrcode,
    /// Downscale an image read from stdin to stdout
    Resize,
}

#[derive(Parser, Debug)]
#[command(name = "qrimzn", version)]
#[command(about = "Image Processing Tool (QR Code Generation & Image Resizing)")]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Operation type
    #[arg(long = "type", value_enum, default_value_t = OperationType::Qrcode)]
    pub operation: OperationType,

    /// QR code content (URL)
    #[arg(long, default_value = DEFAULT_CONTENT)]
    pub content: String,

    /// Code printed as the label under the QR code
    #[arg(long, default_value = DEFAULT_CODE)]
    pub code: String,

    /// Target width for image resizing
    #[arg(long, default_value = "800", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
}

impl Args {
    /// Parses the process arguments, exiting on `--help` or bad input.
    ///
    /// Help goes to stderr with status 0. Any usage error prints the error and
    /// the full help, then exits with status 1.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(e) => exit_with_usage(e),
        }
    }
}

fn exit_with_usage(e: clap::Error) -> ! {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            eprint!("{e}");
            std::process::exit(0);
        }
        _ => {
            eprintln!("{e}");
            eprintln!("{}", Args::command().render_help());
            std::process::exit(1);
        }
    }
}
