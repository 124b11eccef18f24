#![windows_subsystem = "windows"]

use std::{error::Error, process, str::FromStr};

use iced::{
    keyboard::{key::Named, Key, Modifiers},
    Pixels, Settings, Size, Subscription, Task,
};
use tracing_subscriber::filter::LevelFilter;

use irandocs_gui::{
    logger,
    state::{Msg, State},
    VERSION,
};
use irandocs_ui::{font, theme::Theme, widget::Element};

#[derive(Debug, PartialEq)]
enum Arg {
    LogLevel(LevelFilter),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: irandocs [OPTIONS]

Options:
    --log <LEVEL>       Set the log level (error, warn, info, debug, trace)
    -v, --version       Display irandocs version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--log" {
            if let Some(level) = args.get(i + 1) {
                res.push(Arg::LogLevel(LevelFilter::from_str(level)?));
            } else {
                return Err("missing arg to --log".into());
            }
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let log_level = args
        .iter()
        .map(|Arg::LogLevel(level)| *level)
        .next()
        .unwrap_or(LevelFilter::INFO);
    logger::setup_logger(log_level)?;

    let settings = Settings {
        default_font: font::REGULAR,
        default_text_size: Pixels(16.0),
        ..Default::default()
    };

    // A portrait window standing in for the phone screen.
    let window_settings = iced::window::Settings {
        size: Size::new(420.0, 760.0),
        resizable: false,
        ..Default::default()
    };

    iced::application(App::title, App::update, App::view)
        .theme(|_| Theme::default())
        .settings(settings)
        .window(window_settings)
        .subscription(App::subscription)
        .run_with(|| App::new(()))?;

    Ok(())
}

pub struct App {
    state: State,
}

impl App {
    pub fn new(_flags: ()) -> (Self, Task<Msg>) {
        (
            Self {
                state: State::new(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "IranDocs".to_string()
    }

    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        self.state.update(message)
    }

    pub fn view(&self) -> Element<'_, Msg> {
        self.state.view()
    }

    pub fn subscription(&self) -> Subscription<Msg> {
        iced::keyboard::on_key_press(handle_key_press)
    }
}

// Escape is the desktop stand-in for the back signal. It only has an effect
// while the sheet is visible, see `State::update`.
fn handle_key_press(key: Key, _modifiers: Modifiers) -> Option<Msg> {
    match key {
        Key::Named(Named::Escape) => Some(Msg::SheetClose),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["app".into(), "--log".into()]).is_err());
        assert!(parse_args(vec!["app".into(), "--log".into(), "nope".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::LogLevel(LevelFilter::DEBUG)]),
            parse_args(vec!["app".into(), "--log".into(), "debug".into()]).ok()
        );
        assert_eq!(Some(vec![]), parse_args(vec!["app".into()]).ok());
    }
}
