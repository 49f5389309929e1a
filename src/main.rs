use iced_folio::app::{self, Flags};
use pico_args;

const HELP: &str = "\
iced_folio - desktop portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>     Locale override in BCP-47 form (e.g. fr, en-US)
  --content <FILE>    TOML content file replacing the embedded portfolio
  -h, --help          Print this help
  -V, --version       Print the version
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    if args.contains(["-V", "--version"]) {
        println!("iced_folio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        content_path: args.opt_value_from_str("--content").unwrap(),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("error: unexpected argument {:?}", rest[0]);
        eprintln!("Run `iced_folio --help` for usage.");
        std::process::exit(2);
    }

    app::run(flags)
}
