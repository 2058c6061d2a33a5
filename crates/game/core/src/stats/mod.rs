//! Stat derivation and the shared point/load helpers.
//!
//! ```text
//! [ Character draft (raw selections) ] + [ Culture modifiers ]
//!      ↓
//! [ Derived stats: Endurance, Hope, Parry, thresholds, TNs ]
//!      ↓
//! [ Load status against current Endurance ]
//! ```
//!
//! Every function here is pure. Nothing derived is stored; missing data
//! degrades to zero or `None` instead of failing.

pub mod derived;
pub mod favoured;
pub mod load;
pub mod points;

pub use derived::{DerivedStats, TN_BASE, derive_stats};
pub use favoured::compute_favoured_skills;
pub use load::{LoadStatus, compute_load, compute_load_status};
pub use points::{
    PointPool, total_combat_points, total_skill_points, validate_combat_points,
    validate_skill_points,
};
