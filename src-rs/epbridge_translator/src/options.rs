/// Options for one translation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslatorOptions {
    exclude_space_translation: bool,
}

impl TranslatorOptions {
    /// Creates options with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exclude_space_translation: false,
        }
    }

    /// Sets whether spaces are folded into their thermal zone.
    ///
    /// When set, no `Space` records are written. Loads refer to the zone,
    /// space types become `ZoneList` records and the zone's `Sizing:Zone`
    /// refers to the space's outdoor air specification directly.
    #[must_use]
    pub const fn with_exclude_space_translation(mut self, exclude: bool) -> Self {
        self.exclude_space_translation = exclude;
        self
    }

    /// Returns whether spaces are folded into their thermal zone.
    #[must_use]
    pub const fn exclude_space_translation(&self) -> bool {
        self.exclude_space_translation
    }
}
