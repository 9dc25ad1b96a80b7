use std::path::PathBuf;

use crate::error::Error;

/// Positional arguments of a single invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct Arguments {
    pub input_file: PathBuf,
    pub semitones: i32,
}

/// Attempts to get the input file and semitone offset from the command line arguments.
pub fn parse_arguments() -> Result<Arguments, Error> {
    parse_arguments_from(std::env::args())
}

/// Parses an argument list whose first element is the program name.
///
/// Nothing is read from disk here; a missing input file is reported when the notes are read.
pub fn parse_arguments_from<I>(args: I) -> Result<Arguments, Error>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<_> = args.into_iter().collect();
    if args.len() != 3 {
        return Err(Error::Usage);
    }

    let semitones = args[2]
        .parse::<i32>()
        .map_err(|_| Error::InvalidSemitones(args[2].clone()))?;

    Ok(Arguments {
        input_file: PathBuf::from(&args[1]),
        semitones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_file_and_semitones() {
        let parsed = parse_arguments_from(args(&["note-transposer", "notes.json", "-5"])).unwrap();
        assert_eq!(
            parsed,
            Arguments {
                input_file: PathBuf::from("notes.json"),
                semitones: -5,
            }
        );
    }

    #[test]
    fn accepts_explicit_plus_sign() {
        let parsed = parse_arguments_from(args(&["note-transposer", "notes.json", "+7"])).unwrap();
        assert_eq!(parsed.semitones, 7);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        for list in [
            &["note-transposer"][..],
            &["note-transposer", "notes.json"][..],
            &["note-transposer", "notes.json", "3", "extra"][..],
        ] {
            let error = parse_arguments_from(args(list)).unwrap_err();
            assert!(matches!(error, Error::Usage), "{list:?}");
        }
    }

    #[test]
    fn rejects_non_integer_semitones() {
        for value in ["three", "1.5", "", " 4"] {
            let error = parse_arguments_from(args(&["note-transposer", "notes.json", value])).unwrap_err();
            assert!(matches!(error, Error::InvalidSemitones(ref v) if v == value));
            assert!(error.is_usage());
        }
    }

    #[test]
    fn does_not_touch_the_filesystem() {
        let parsed =
            parse_arguments_from(args(&["note-transposer", "/definitely/not/here.json", "0"])).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("/definitely/not/here.json"));
    }
}
