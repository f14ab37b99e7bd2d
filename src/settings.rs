//! Resolved formatting settings and the settings surface exposed to a host
//! configuration UI.

use crate::error::SettingsError;
use crate::input::DataViewObjects;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Default text size in points.
pub const DEFAULT_TEXT_SIZE: u32 = 8;

/// Object name of the page-size group.
pub const PAGE_SIZE_OBJECT: &str = "pagesize";
/// Property holding the rows per page.
pub const NUMBER_OF_ROWS_PROPERTY: &str = "numberofrows";
/// Object name of the general formatting group.
pub const GENERAL_OBJECT: &str = "general";
/// Property holding the text size.
pub const TEXT_SIZE_PROPERTY: &str = "textsize";

/// Page-size group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeSettings {
    /// Rows per page, always at least 1.
    pub page_size: usize,
}

/// General formatting group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSettings {
    /// Font size the renderer applies to the table.
    pub text_size: u32,
}

/// Settings resolved for a single update.
///
/// # Examples
///
/// ```rust
/// use paginated_table::input::DataViewObjects;
/// use paginated_table::settings::Settings;
///
/// let objects = DataViewObjects::new().with_number("pagesize", "numberofrows", 5.0);
/// let settings = Settings::resolve(&objects);
/// assert_eq!(settings.page_size.page_size, 5);
/// assert_eq!(settings.text.text_size, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Page-size group.
    pub page_size: PageSizeSettings,
    /// General formatting group.
    pub text: TextSettings,
    /// Always 0 in a freshly built view model; the controller owns the
    /// real starting row.
    pub starting_row: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: PageSizeSettings {
                page_size: DEFAULT_PAGE_SIZE,
            },
            text: TextSettings {
                text_size: DEFAULT_TEXT_SIZE,
            },
            starting_row: 0,
        }
    }
}

impl Settings {
    /// Resolves settings from host overrides, falling back to the defaults
    /// for anything absent or unusable.
    pub fn resolve(objects: &DataViewObjects) -> Self {
        let defaults = Self::default();
        Self {
            page_size: PageSizeSettings {
                page_size: positive_override(objects, PAGE_SIZE_OBJECT, NUMBER_OF_ROWS_PROPERTY)
                    .unwrap_or(defaults.page_size.page_size),
            },
            text: TextSettings {
                text_size: positive_override(objects, GENERAL_OBJECT, TEXT_SIZE_PROPERTY)
                    .and_then(|size| u32::try_from(size).ok())
                    .unwrap_or(defaults.text.text_size),
            },
            starting_row: 0,
        }
    }
}

// Fractions are truncated; anything below 1 after truncation is ignored.
fn positive_override(objects: &DataViewObjects, object: &str, property: &str) -> Option<usize> {
    let value = objects.get_number(object, property)?;
    if !value.is_finite() || value < 1.0 {
        return None;
    }
    Some(value.trunc().min(usize::MAX as f64) as usize)
}

/// One configurable property on the settings surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsProperty {
    /// `pagesize.numberofrows`.
    NumberOfRows,
    /// `general.textsize`.
    TextSize,
}

impl SettingsProperty {
    /// All properties, in the order a configuration UI lists them.
    pub const ALL: [SettingsProperty; 2] = [SettingsProperty::NumberOfRows, SettingsProperty::TextSize];

    /// Looks up a property by its host object and property names.
    pub fn lookup(object: &str, property: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.object_name() == object && p.property_name() == property)
    }

    /// Object name the property belongs to.
    pub fn object_name(self) -> &'static str {
        match self {
            SettingsProperty::NumberOfRows => PAGE_SIZE_OBJECT,
            SettingsProperty::TextSize => GENERAL_OBJECT,
        }
    }

    /// Property name within its object.
    pub fn property_name(self) -> &'static str {
        match self {
            SettingsProperty::NumberOfRows => NUMBER_OF_ROWS_PROPERTY,
            SettingsProperty::TextSize => TEXT_SIZE_PROPERTY,
        }
    }

    /// Inclusive range of accepted values.
    pub fn valid_range(self) -> NumberRange {
        match self {
            SettingsProperty::NumberOfRows => NumberRange { min: 1, max: 500 },
            SettingsProperty::TextSize => NumberRange { min: 8, max: 40 },
        }
    }

    /// Default value.
    pub fn default_value(self) -> u32 {
        match self {
            SettingsProperty::NumberOfRows => DEFAULT_PAGE_SIZE as u32,
            SettingsProperty::TextSize => DEFAULT_TEXT_SIZE,
        }
    }

    /// Current value of the property in `settings`.
    pub fn current_value(self, settings: &Settings) -> u32 {
        match self {
            SettingsProperty::NumberOfRows => {
                u32::try_from(settings.page_size.page_size).unwrap_or(u32::MAX)
            }
            SettingsProperty::TextSize => settings.text.text_size,
        }
    }

    /// Validates a value written by a configuration UI.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paginated_table::settings::SettingsProperty;
    ///
    /// assert_eq!(SettingsProperty::NumberOfRows.validate(50.0), Ok(50));
    /// assert!(SettingsProperty::NumberOfRows.validate(501.0).is_err());
    /// assert!(SettingsProperty::TextSize.validate(9.5).is_err());
    /// ```
    pub fn validate(self, value: f64) -> Result<u32, SettingsError> {
        let property = self.property_name();
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(SettingsError::NotAnInteger { property, value });
        }
        let range = self.valid_range();
        if value < f64::from(range.min) || value > f64::from(range.max) {
            return Err(SettingsError::OutOfRange {
                property,
                value,
                min: range.min,
                max: range.max,
            });
        }
        Ok(value as u32)
    }

    /// Validates a value for a property named by the host.
    pub fn validate_named(object: &str, property: &str, value: f64) -> Result<u32, SettingsError> {
        let prop = Self::lookup(object, property).ok_or_else(|| SettingsError::UnknownProperty {
            object: object.to_string(),
            property: property.to_string(),
        })?;
        prop.validate(value)
    }
}

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    /// Lower bound.
    pub min: u32,
    /// Upper bound.
    pub max: u32,
}

/// A property value paired with its accepted range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInstance {
    /// Property name.
    pub name: &'static str,
    /// Current value.
    pub value: u32,
    /// Accepted values.
    pub valid_range: NumberRange,
}

/// One settings object as shown in a configuration UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInstance {
    /// Object name.
    pub object_name: &'static str,
    /// Properties of the object.
    pub properties: Vec<PropertyInstance>,
}

/// Lists the instances of `object_name` for a configuration UI.
///
/// Unknown object names yield an empty list.
pub fn enumerate_object_instances(object_name: &str, settings: &Settings) -> Vec<ObjectInstance> {
    let properties: Vec<PropertyInstance> = SettingsProperty::ALL
        .into_iter()
        .filter(|p| p.object_name() == object_name)
        .map(|p| PropertyInstance {
            name: p.property_name(),
            value: p.current_value(settings),
            valid_range: p.valid_range(),
        })
        .collect();

    match SettingsProperty::ALL.into_iter().find(|p| p.object_name() == object_name) {
        Some(p) => vec![ObjectInstance {
            object_name: p.object_name(),
            properties,
        }],
        None => Vec::new(),
    }
}
