use serde::{Deserialize, Serialize};

/// Amenity or defect that moves the rent by a fixed monthly tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyFeature {
    Furnished,
    Appliances,
    HeatingIncluded,
    GymAccess,
    IndoorParking,
    ViewBalcony,
    RecentRenovations,
    PoorCondition,
}

impl PropertyFeature {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Furnished,
            Self::Appliances,
            Self::HeatingIncluded,
            Self::GymAccess,
            Self::IndoorParking,
            Self::ViewBalcony,
            Self::RecentRenovations,
            Self::PoorCondition,
        ]
    }

    /// Monthly adjustment applied when the feature is present.
    pub const fn tariff(self) -> f64 {
        match self {
            Self::Furnished => 225.0,
            Self::Appliances => 75.0,
            Self::HeatingIncluded => 75.0,
            Self::GymAccess => 100.0,
            Self::IndoorParking => 125.0,
            Self::ViewBalcony => 75.0,
            Self::RecentRenovations => 100.0,
            Self::PoorCondition => -125.0,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Furnished => "furnished",
            Self::Appliances => "appliances",
            Self::HeatingIncluded => "heatingIncluded",
            Self::GymAccess => "gymAccess",
            Self::IndoorParking => "indoorParking",
            Self::ViewBalcony => "viewBalcony",
            Self::RecentRenovations => "recentRenovations",
            Self::PoorCondition => "poorCondition",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Furnished => "Furnished",
            Self::Appliances => "Appliances included",
            Self::HeatingIncluded => "Heating included",
            Self::GymAccess => "Gym access",
            Self::IndoorParking => "Indoor parking",
            Self::ViewBalcony => "View or balcony",
            Self::RecentRenovations => "Recent renovations",
            Self::PoorCondition => "Poor condition",
        }
    }

    /// Accepts the camelCase key or its snake/kebab-case spelling, ignoring case.
    pub fn from_key(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ordered()
            .into_iter()
            .find(|feature| feature.key().eq_ignore_ascii_case(&normalized))
    }
}

/// Feature flags of a unit. Every flag is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFeatures {
    pub furnished: bool,
    pub appliances: bool,
    pub heating_included: bool,
    pub gym_access: bool,
    pub indoor_parking: bool,
    pub view_balcony: bool,
    pub recent_renovations: bool,
    pub poor_condition: bool,
}

impl PropertyFeatures {
    pub fn has(&self, feature: PropertyFeature) -> bool {
        match feature {
            PropertyFeature::Furnished => self.furnished,
            PropertyFeature::Appliances => self.appliances,
            PropertyFeature::HeatingIncluded => self.heating_included,
            PropertyFeature::GymAccess => self.gym_access,
            PropertyFeature::IndoorParking => self.indoor_parking,
            PropertyFeature::ViewBalcony => self.view_balcony,
            PropertyFeature::RecentRenovations => self.recent_renovations,
            PropertyFeature::PoorCondition => self.poor_condition,
        }
    }

    pub fn set(&mut self, feature: PropertyFeature, enabled: bool) {
        let flag = match feature {
            PropertyFeature::Furnished => &mut self.furnished,
            PropertyFeature::Appliances => &mut self.appliances,
            PropertyFeature::HeatingIncluded => &mut self.heating_included,
            PropertyFeature::GymAccess => &mut self.gym_access,
            PropertyFeature::IndoorParking => &mut self.indoor_parking,
            PropertyFeature::ViewBalcony => &mut self.view_balcony,
            PropertyFeature::RecentRenovations => &mut self.recent_renovations,
            PropertyFeature::PoorCondition => &mut self.poor_condition,
        };
        *flag = enabled;
    }

    pub fn enabled(&self) -> impl Iterator<Item = PropertyFeature> + '_ {
        PropertyFeature::ordered()
            .into_iter()
            .filter(|feature| self.has(*feature))
    }

    /// Itemized tariffs of the enabled features, in declaration order.
    pub fn breakdown(&self) -> Vec<FeatureAdjustment> {
        self.enabled()
            .map(|feature| FeatureAdjustment {
                feature,
                label: feature.label(),
                amount: feature.tariff(),
            })
            .collect()
    }
}

impl FromIterator<PropertyFeature> for PropertyFeatures {
    fn from_iter<I: IntoIterator<Item = PropertyFeature>>(iter: I) -> Self {
        let mut features = Self::default();
        for feature in iter {
            features.set(feature, true);
        }
        features
    }
}

/// One line of a feature adjustment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAdjustment {
    pub feature: PropertyFeature,
    pub label: &'static str,
    pub amount: f64,
}

/// Net monthly adjustment of every enabled feature. May be negative.
pub fn calculate_feature_adjustments(features: &PropertyFeatures) -> f64 {
    features
        .enabled()
        .fold(0.0, |total, feature| total + feature.tariff())
}
