use crate::QualityPreset;
use std::io::{self, BufRead, Write};

/// Print the preset menu to `output` and read one answer from `input`.
///
/// There is no retry: an unrecognised answer, an empty line or end of input
/// all select [`QualityPreset::Prepress`].
pub fn prompt_preset<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<QualityPreset> {
    writeln!(output, "Select compression quality:")?;
    for (i, preset) in QualityPreset::ALL.iter().enumerate() {
        writeln!(output, "  {}) {:<9} - {}", i + 1, preset.tag(), preset.description())?;
    }
    write!(output, "Enter choice [1-4] (default 1): ")?;
    output.flush()?;

    // Raw bytes, so a non-UTF-8 answer falls back to the default too
    let mut answer = Vec::new();
    input.read_until(b'\n', &mut answer)?;

    let preset = QualityPreset::from_choice(&String::from_utf8_lossy(&answer));
    writeln!(output, "Using preset: {preset}")?;
    Ok(preset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (QualityPreset, String) {
        ask_bytes(answer.as_bytes())
    }

    fn ask_bytes(answer: &[u8]) -> (QualityPreset, String) {
        let mut input = answer;
        let mut output = Vec::new();
        let preset = prompt_preset(&mut input, &mut output).unwrap();
        (preset, String::from_utf8(output).unwrap())
    }

    #[test]
    fn menu_lists_every_preset() {
        let (_, shown) = ask("1\n");
        for preset in QualityPreset::ALL {
            assert!(shown.contains(preset.tag()), "{shown}");
        }
    }

    #[test]
    fn reads_choice() {
        assert_eq!(ask("3\n").0, QualityPreset::Ebook);
        assert_eq!(ask("4").0, QualityPreset::Screen);
    }

    #[test]
    fn invalid_utf8_answer_defaults() {
        assert_eq!(ask_bytes(b"\xff\n").0, QualityPreset::Prepress);
        assert_eq!(ask_bytes(b"\xff4\n").0, QualityPreset::Prepress);
    }

    #[test]
    fn end_of_input_defaults() {
        let (preset, shown) = ask("");
        assert_eq!(preset, QualityPreset::Prepress);
        assert!(shown.ends_with("Using preset: prepress\n"));
    }
}
