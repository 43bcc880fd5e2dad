use iced_lightbox::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        start_page: args.opt_value_from_str("--page").unwrap(),
    };

    app::run(flags)
}
