use std::fmt;
use std::str::FromStr;

// ── QualityPreset ────────────────────────────────────────────────────────────

/// A named bundle of Ghostscript compression parameters, trading file size
/// against visual fidelity.
///
/// The variant is passed to the tool as `-dPDFSETTINGS=/<tag>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityPreset {
    /// Highest quality, colour preserving. The default.
    #[default]
    Prepress,
    /// High quality for desktop printing.
    Printer,
    /// Medium quality, suited to on-screen reading.
    Ebook,
    /// Lowest quality, smallest output.
    Screen,
}

impl QualityPreset {
    /// All presets in menu order.
    pub const ALL: [QualityPreset; 4] = [
        QualityPreset::Prepress,
        QualityPreset::Printer,
        QualityPreset::Ebook,
        QualityPreset::Screen,
    ];

    /// The tag Ghostscript expects after `/PDFSETTINGS=/`.
    pub fn tag(self) -> &'static str {
        match self {
            QualityPreset::Prepress => "prepress",
            QualityPreset::Printer => "printer",
            QualityPreset::Ebook => "ebook",
            QualityPreset::Screen => "screen",
        }
    }

    /// One-line description shown in the interactive menu.
    pub fn description(self) -> &'static str {
        match self {
            QualityPreset::Prepress => "High quality, color preserving, 300 dpi",
            QualityPreset::Printer => "High quality, 300 dpi",
            QualityPreset::Ebook => "Medium quality, 150 dpi",
            QualityPreset::Screen => "Low quality, smallest size, 72 dpi",
        }
    }

    /// Map a menu answer to a preset.
    ///
    /// Only the first non-whitespace character counts. `1`–`4` pick the
    /// matching preset; anything else (including an empty answer) falls back
    /// to [`QualityPreset::Prepress`].
    ///
    /// ```
    /// # use pdfshrink::QualityPreset;
    /// assert_eq!(QualityPreset::from_choice("3"), QualityPreset::Ebook);
    /// assert_eq!(QualityPreset::from_choice(""), QualityPreset::Prepress);
    /// assert_eq!(QualityPreset::from_choice("x"), QualityPreset::Prepress);
    /// ```
    pub fn from_choice(answer: &str) -> Self {
        match answer.trim_start().chars().next() {
            Some('2') => QualityPreset::Printer,
            Some('3') => QualityPreset::Ebook,
            Some('4') => QualityPreset::Screen,
            _ => QualityPreset::Prepress,
        }
    }
}

impl fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QualityPreset {
    type Err = String;

    /// Parse a preset by name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        QualityPreset::ALL
            .into_iter()
            .find(|p| p.tag() == wanted)
            .ok_or_else(|| {
                format!("unknown preset '{s}' (expected prepress, printer, ebook or screen)")
            })
    }
}
