// 📋 GuitarSpec - What a guitar is, independent of which one it is
//
// Value object: every field is set once in `new` and never changes.
// `matches` is NOT equality: it is asymmetric and, in its default
// (Literal) form, never looks at the model name at all.

use crate::entities::{Builder, GuitarType, Wood};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

// ============================================================================
// MATCH OPTIONS
// ============================================================================

/// How the model name takes part in `matches`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelMatching {
    /// Historical rule: the other model is lower-cased and compared to
    /// itself, so the model never causes a rejection
    #[default]
    Literal,

    /// Models must be equal ignoring case, unless the other model is empty
    CaseInsensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchOptions {
    #[serde(default)]
    pub model: ModelMatching,
}

impl MatchOptions {
    pub fn literal() -> Self {
        MatchOptions {
            model: ModelMatching::Literal,
        }
    }

    pub fn case_insensitive_model() -> Self {
        MatchOptions {
            model: ModelMatching::CaseInsensitive,
        }
    }
}

/// Field that made a match fail, in the order the checks run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecField {
    Builder,
    Model,
    Type,
    BackWood,
    TopWood,
}

impl SpecField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecField::Builder => "builder",
            SpecField::Model => "model",
            SpecField::Type => "type",
            SpecField::BackWood => "back wood",
            SpecField::TopWood => "top wood",
        }
    }
}

// ============================================================================
// GUITAR SPEC
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuitarSpec {
    builder: Builder,
    model: String,
    #[serde(rename = "type")]
    guitar_type: GuitarType,
    num_strings: u32,
    back_wood: Wood,
    top_wood: Wood,
}

impl GuitarSpec {
    /// Store all six attributes as given (model is not lower-cased)
    pub fn new(
        builder: Builder,
        model: impl Into<String>,
        guitar_type: GuitarType,
        num_strings: u32,
        back_wood: Wood,
        top_wood: Wood,
    ) -> Self {
        GuitarSpec {
            builder,
            model: model.into(),
            guitar_type,
            num_strings,
            back_wood,
            top_wood,
        }
    }

    pub fn builder(&self) -> Builder {
        self.builder
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn guitar_type(&self) -> GuitarType {
        self.guitar_type
    }

    pub fn num_strings(&self) -> u32 {
        self.num_strings
    }

    pub fn back_wood(&self) -> Wood {
        self.back_wood
    }

    pub fn top_wood(&self) -> Wood {
        self.top_wood
    }

    /// Catalog match with the historical (Literal) model rule
    pub fn matches(&self, other: &GuitarSpec) -> bool {
        self.matches_with(other, &MatchOptions::default())
    }

    pub fn matches_with(&self, other: &GuitarSpec, options: &MatchOptions) -> bool {
        self.mismatch(other, options).is_none()
    }

    /// Same as `matches`, but an absent `other` is an error instead of a panic
    pub fn try_matches(&self, other: Option<&GuitarSpec>) -> Result<bool, CatalogError> {
        other
            .map(|other| self.matches(other))
            .ok_or_else(|| CatalogError::InvalidArgument("no spec to match against".to_string()))
    }

    /// First field that fails the match, or None when `other` matches.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// builder, model, type, back wood, top wood. The string count is
    /// never compared.
    pub fn mismatch(&self, other: &GuitarSpec, options: &MatchOptions) -> Option<SpecField> {
        if self.builder != other.builder {
            return Some(SpecField::Builder);
        }

        let other_model = other.model.to_lowercase();
        let rejects_model = match options.model {
            ModelMatching::Literal => {
                !other_model.is_empty() && other_model != other.model.to_lowercase()
            }
            ModelMatching::CaseInsensitive => {
                !other_model.is_empty() && other_model != self.model.to_lowercase()
            }
        };
        if rejects_model {
            return Some(SpecField::Model);
        }

        if self.guitar_type != other.guitar_type {
            return Some(SpecField::Type);
        }
        if self.back_wood != other.back_wood {
            return Some(SpecField::BackWood);
        }
        if self.top_wood != other.top_wood {
            return Some(SpecField::TopWood);
        }

        None
    }
}

impl std::fmt::Display for GuitarSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} guitar, {}-string, {} back and sides, {} top",
            self.builder,
            self.model,
            self.guitar_type,
            self.num_strings,
            self.back_wood,
            self.top_wood
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fender(model: &str) -> GuitarSpec {
        GuitarSpec::new(
            Builder::Fender,
            model,
            GuitarType::Electric,
            6,
            Wood::Alder,
            Wood::Alder,
        )
    }

    #[test]
    fn test_accessors_return_constructor_arguments() {
        let spec = GuitarSpec::new(
            Builder::Martin,
            "D-18",
            GuitarType::Acoustic,
            12,
            Wood::Mahogany,
            Wood::Adirondack,
        );

        assert_eq!(spec.builder(), Builder::Martin);
        assert_eq!(spec.model(), "D-18");
        assert_eq!(spec.guitar_type(), GuitarType::Acoustic);
        assert_eq!(spec.num_strings(), 12);
        assert_eq!(spec.back_wood(), Wood::Mahogany);
        assert_eq!(spec.top_wood(), Wood::Adirondack);
    }

    #[test]
    fn test_model_stored_verbatim() {
        let spec = fender("StratoCASTER ");
        assert_eq!(spec.model(), "StratoCASTER ");

        let empty = fender("");
        assert_eq!(empty.model(), "");
    }

    #[test]
    fn test_different_model_still_matches() {
        let a = fender("Stratocaster");
        let b = fender("Telecaster");

        assert!(a.matches(&b));
        assert!(b.matches(&a));
        assert!(a.matches(&fender("")));
        assert!(a.matches(&fender("STRATOCASTER")));
    }

    #[test]
    fn test_builder_mismatch() {
        let a = fender("Strat");
        let b = GuitarSpec::new(
            Builder::Gibson,
            "Strat",
            GuitarType::Electric,
            6,
            Wood::Alder,
            Wood::Alder,
        );

        assert!(!a.matches(&b));
        assert_eq!(a.mismatch(&b, &MatchOptions::default()), Some(SpecField::Builder));
    }

    #[test]
    fn test_any_builder_is_not_a_wildcard() {
        let a = fender("Strat");
        let any = GuitarSpec::new(Builder::Any, "Strat", GuitarType::Electric, 6, Wood::Alder, Wood::Alder);

        assert!(!a.matches(&any));
        assert!(!any.matches(&a));
    }

    #[test]
    fn test_type_and_wood_mismatches() {
        let a = fender("Strat");

        let acoustic = GuitarSpec::new(Builder::Fender, "Strat", GuitarType::Acoustic, 6, Wood::Alder, Wood::Alder);
        let maple_back = GuitarSpec::new(Builder::Fender, "Strat", GuitarType::Electric, 6, Wood::Maple, Wood::Alder);
        let maple_top = GuitarSpec::new(Builder::Fender, "Strat", GuitarType::Electric, 6, Wood::Alder, Wood::Maple);

        let options = MatchOptions::default();
        assert_eq!(a.mismatch(&acoustic, &options), Some(SpecField::Type));
        assert_eq!(a.mismatch(&maple_back, &options), Some(SpecField::BackWood));
        assert_eq!(a.mismatch(&maple_top, &options), Some(SpecField::TopWood));

        assert!(!a.matches(&acoustic));
        assert!(!a.matches(&maple_back));
        assert!(!a.matches(&maple_top));
    }

    #[test]
    fn test_string_count_is_ignored() {
        let six = fender("Strat");
        let twelve = GuitarSpec::new(Builder::Fender, "Strat", GuitarType::Electric, 12, Wood::Alder, Wood::Alder);

        assert!(six.matches(&twelve));
    }

    #[test]
    fn test_mismatch_reports_first_failure() {
        let a = fender("Strat");
        let everything_differs = GuitarSpec::new(
            Builder::Gibson,
            "Les Paul",
            GuitarType::Acoustic,
            6,
            Wood::Mahogany,
            Wood::Maple,
        );

        assert_eq!(
            a.mismatch(&everything_differs, &MatchOptions::case_insensitive_model()),
            Some(SpecField::Builder)
        );

        let same_builder = GuitarSpec::new(
            Builder::Fender,
            "Jazzmaster",
            GuitarType::Acoustic,
            6,
            Wood::Mahogany,
            Wood::Maple,
        );
        assert_eq!(
            a.mismatch(&same_builder, &MatchOptions::case_insensitive_model()),
            Some(SpecField::Model)
        );
        assert_eq!(a.mismatch(&same_builder, &MatchOptions::literal()), Some(SpecField::Type));
    }

    #[test]
    fn test_spec_field_labels() {
        assert_eq!(SpecField::Builder.as_str(), "builder");
        assert_eq!(SpecField::Model.as_str(), "model");
        assert_eq!(SpecField::Type.as_str(), "type");
        assert_eq!(SpecField::BackWood.as_str(), "back wood");
        assert_eq!(SpecField::TopWood.as_str(), "top wood");
    }

    #[test]
    fn test_case_insensitive_model_matching() {
        let options = MatchOptions::case_insensitive_model();
        let strat = fender("Strat");

        assert!(!strat.matches_with(&fender("Tele"), &options));
        assert!(fender("strat").matches_with(&fender("STRAT"), &options));

        // Empty model on the other side means "any model"
        assert!(strat.matches_with(&fender(""), &options));
        assert!(!fender("").matches_with(&strat, &options));
    }

    #[test]
    fn test_try_matches() {
        let a = fender("Strat");

        assert_eq!(a.try_matches(Some(&fender("Tele"))), Ok(true));

        let err = a.try_matches(None).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[test]
    fn test_display() {
        let spec = GuitarSpec::new(
            Builder::Olson,
            "SJ",
            GuitarType::Acoustic,
            6,
            Wood::IndianRosewood,
            Wood::Cedar,
        );

        assert_eq!(
            spec.to_string(),
            "Olson SJ acoustic guitar, 6-string, Indian Rosewood back and sides, Cedar top"
        );
    }

    #[test]
    fn test_json_shape() {
        let spec = fender("Stratocastor");
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["builder"], "FENDER");
        assert_eq!(json["type"], "ELECTRIC");
        assert_eq!(json["back_wood"], "ALDER");
        assert_eq!(json["num_strings"], 6);

        let back: GuitarSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_match_options_default_is_literal() {
        assert_eq!(MatchOptions::default().model, ModelMatching::Literal);

        let parsed: MatchOptions = serde_json::from_str(r#"{"model":"case_insensitive"}"#).unwrap();
        assert_eq!(parsed, MatchOptions::case_insensitive_model());

        let empty: MatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, MatchOptions::literal());
    }
}
