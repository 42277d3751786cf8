use anyhow::Result;
use derive_more::Display;
use inquire::{CustomType, Select, Text};
use log::{info, LevelFilter};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use universe::env::{load_dotenv, EnvLoader};
use universe::utils::phone::{add_country_code_phone_number, censor_phone_number};
use universe::utils::random::{generate_otp_code, generate_refer_otp_code};
use universe::validation::{check_username, missing_password_class, ValidationType};

const DEFAULT_LOG_FILE: &str = "./universe.log";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu. `enter` returns None when the menu wants to close,
/// Some(()) to run again.
trait Menu {
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it asks to exit, reporting errors along the way
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

struct App;

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Validate a value")]
            Validate,
            #[display("Validate a date-time against a layout")]
            DateTime,
            #[display("Add country code to a phone number")]
            NormalizePhone,
            #[display("Censor a phone number")]
            CensorPhone,
            #[display("Generate an OTP code")]
            Otp,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Validate => validate_value()?,
            Choice::DateTime => {
                let layout = Text::new("Layout (strftime):")
                    .with_default("%Y-%m-%dT%H:%M:%S%.fZ")
                    .prompt()?;
                let value = Text::new("Value:").prompt()?;
                print_outcome(universe::validation::is_valid_date_time_from_string(&layout, &value));
            }
            Choice::NormalizePhone => {
                let country_code = Text::new("Country code (ISO alpha-2):").prompt()?;
                let phone_number = Text::new("Phone number:").prompt()?;
                let normalized = add_country_code_phone_number(&country_code, &phone_number)?;
                info!("Normalized a {country_code} phone number");
                println!("{normalized}");
            }
            Choice::CensorPhone => {
                let phone_number = Text::new("Phone number:").prompt()?;
                let replace_digit = CustomType::<i32>::new("Characters to mask:").prompt()?;
                println!("{}", censor_phone_number(&phone_number, replace_digit));
            }
            Choice::Otp => {
                println!("OTP: {}", generate_otp_code());
                println!("Referral code: {}", generate_refer_otp_code());
            }
            Choice::Exit => return Ok(MENU_EXIT),
        }

        Ok(MENU_LOOP)
    }
}

fn validate_value() -> Result<()> {
    let kind = Select::new("Kind of value:", ValidationType::iter().collect()).prompt()?;
    let value = Text::new("Value:").prompt()?;

    let outcome = kind.check(&value);
    print_outcome(outcome);

    // Explain policy rejections
    match kind {
        ValidationType::Password => {
            if let Some(class) = missing_password_class(&value) {
                println!("[!] Missing at least one {class}");
            }
        }
        ValidationType::Username => {
            if let Err(reason) = check_username(&value) {
                println!("[!] {reason}");
            }
        }
        ValidationType::WeakPin if outcome => println!("[!] This PIN is easy to guess"),
        _ => {}
    }

    Ok(())
}

fn print_outcome(valid: bool) {
    if valid {
        println!("[*] match");
    } else {
        println!("[!] no match");
    }
}

fn main() -> Result<()> {
    load_dotenv();

    let env = EnvLoader::new();
    let log_file = env.default("UNIVERSE_LOG_FILE", DEFAULT_LOG_FILE);
    let level = env
        .default("UNIVERSE_LOG_LEVEL", "info")
        .parse()
        .unwrap_or(LevelFilter::Info);

    simple_logging::log_to_file(&log_file, level)?;
    env.assert()?;
    info!("Starting interactive checker");

    App.enter_loop();
    Ok(())
}
