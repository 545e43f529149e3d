use clap::{ColorChoice, Parser};
use clap_lex::{ArgCursor, RawArgs};
use std::ffi::OsString;

/// Command-line arguments for widthopt
///
/// clap's own help flag is disabled: `-h/-?/--help` is declared as a plain
/// switch so the caller decides what is printed, where, and with which
/// exit status.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "widthopt")]
#[command(about = "A minimal command-line option parsing demo")]
#[command(long_about = None)]
#[command(disable_help_flag = true)]
#[command(color = ColorChoice::Never)]
pub struct Args {
    /// How wide should it be?
    #[arg(
        short,
        long,
        value_name = "WIDTH",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub width: i32,

    /// Print help
    #[arg(short, long, short_alias = '?')]
    pub help: bool,
}

/// Scan raw arguments for a help request.
///
/// Runs independently of clap so that a help flag is honoured even when the
/// rest of the command line fails to parse, wherever it appears. Tokens are
/// split with clap's own lexer. The first element is the program name and
/// is skipped. Scanning stops at a bare `--`, and the value taken by a
/// separate `-w`/`--width` token is not inspected.
#[must_use]
pub fn help_requested(argv: &[OsString]) -> bool {
    let raw = RawArgs::new(argv.iter());
    let mut cursor = raw.cursor();
    raw.next(&mut cursor);

    while let Some(arg) = raw.next(&mut cursor) {
        if arg.is_escape() {
            break;
        }

        if let Some((long, value)) = arg.to_long() {
            match long {
                Ok("help") => return true,
                Ok("width") if value.is_none() => skip_width_value(&raw, &mut cursor),
                _ => {}
            }
            continue;
        }

        if arg.is_negative_number() {
            continue;
        }

        if let Some(mut shorts) = arg.to_short() {
            while let Some(flag) = shorts.next_flag() {
                match flag {
                    Ok('h' | '?') => return true,
                    Ok('w') => {
                        // `-w5` carries its value inline
                        if shorts.is_empty() {
                            skip_width_value(&raw, &mut cursor);
                        }
                        break;
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        }
    }

    false
}

/// Consume the token following a separate `-w`/`--width`, unless it is
/// itself a flag.
fn skip_width_value(raw: &RawArgs, cursor: &mut ArgCursor) {
    let takes_value = raw.peek(cursor).is_some_and(|next| {
        next.is_negative_number() || !(next.is_long() || next.is_short() || next.is_escape())
    });
    if takes_value {
        raw.next(cursor);
    }
}
