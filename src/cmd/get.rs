use clap::{arg, command, ArgMatches, Command};

use super::CommandType;
use crate::totp::{generate_totp_at, GetTime};
use crate::utils::is_base32_key;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Get.as_str())
        .about("Get the current one-time password for a secret key")
        .args(&[arg!(-k --key <KEY> "Base32 secret key")
            .required(true)
            .validator(is_base32_key)])
}

pub fn run_get<W, C>(get_args: &ArgMatches, clock: &C, writer: &mut W)
where
    W: OutErr,
    C: GetTime,
{
    let key = match get_args.value_of("key") {
        Some(key) => key,
        _ => {
            writer.write_err("Secret key is required\n");
            return;
        }
    };

    let code = generate_totp_at(key, clock);
    writer.write(&format!("{}\n", code));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::CommandType::Get;
    use crate::tests::constants::RFC_KEY_BASE32;
    use crate::tests::mocks::{MockClock, MockTotpWriter};
    use crate::tests::utils::get_cmd_args;

    #[test]
    fn prints_the_code_for_the_current_window() {
        let mut writer = MockTotpWriter::new();

        let arg_vec = vec!["totp", Get.as_str(), "-k", RFC_KEY_BASE32];
        let get_args = get_cmd_args(Get.as_str(), subcommand(), &arg_vec).unwrap();

        run_get(&get_args, &MockClock::at(59), &mut writer);

        assert_eq!(writer.out, b"287082\n");
        assert_eq!(writer.err, Vec::new());
    }

    #[test]
    fn validates_key_encoding() {
        let arg_vec = vec!["totp", Get.as_str(), "-k", "not-base32!"];
        let get_args = get_cmd_args(Get.as_str(), subcommand(), &arg_vec);

        assert!(get_args.is_err());

        let err = get_args.unwrap_err();

        assert!(
            err.to_string()
                .contains("the key is not a valid base32 encoding"),
            "{}",
            err
        );
    }
}
