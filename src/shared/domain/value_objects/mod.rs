mod override_flag;

pub use override_flag::OverrideFlag;
