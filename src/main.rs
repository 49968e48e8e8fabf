use clap::Command;

use totp::cmd::{self, CommandType};
use totp::totp::Clock;
use totp::writer::TotpWriter;

fn main() {
    let matches = Command::new("totp")
        .about("Generate RFC 6238 time-based one-time passwords")
        .arg_required_else_help(true)
        .subcommand(cmd::get::subcommand())
        .subcommand(cmd::generate::subcommand())
        .get_matches();

    let mut writer = TotpWriter::new();

    match matches.subcommand() {
        Some((cmd, get_args)) if cmd == CommandType::Get.as_str() => {
            cmd::get::run_get(get_args, &Clock::new(), &mut writer)
        }
        Some((cmd, _)) if cmd == CommandType::Generate.as_str() => {
            cmd::generate::run_generate(&mut writer)
        }
        _ => eprintln!("Unknown command"),
    }
}
