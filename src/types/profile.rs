use super::settings::CurrentProfile;

token_enum! {
    /// Named accessibility presets offered in the panel.
    ProfileName, "profile" {
        Dyslexia => "dyslexia", "Dislexia",
        LowVision => "low-vision", "Baja Visión",
        Motor => "motor", "Motor",
        Adhd => "adhd", "TDAH",
        Colorblind => "colorblind", "Daltonismo",
    }
}

impl From<ProfileName> for CurrentProfile {
    fn from(name: ProfileName) -> Self {
        match name {
            ProfileName::Dyslexia => CurrentProfile::Dyslexia,
            ProfileName::LowVision => CurrentProfile::LowVision,
            ProfileName::Motor => CurrentProfile::Motor,
            ProfileName::Adhd => CurrentProfile::Adhd,
            ProfileName::Colorblind => CurrentProfile::Colorblind,
        }
    }
}
