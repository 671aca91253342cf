// ⏰ Capabilities - time and identity sources for expense records
//
// Records never call `Utc::now()` or `Uuid::new_v4()` directly; they ask a
// Clock and an IdGenerator. Production code uses the system versions, tests
// plug in deterministic ones.

use chrono::{DateTime, Utc};

// ============================================================================
// CLOCK
// ============================================================================

/// Source of timezone-aware UTC timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by `chrono::Utc::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ============================================================================
// ID GENERATOR
// ============================================================================

/// Source of identifiers for new records
///
/// Uniqueness is probabilistic and never checked by the store.
pub trait IdGenerator {
    fn generate_unique_id(&self) -> String;
}

/// Random v4 UUIDs, hyphenated
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_unique_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_produces_distinct_v4_ids() {
        let generator = UuidGenerator;
        let a = generator.generate_unique_id();
        let b = generator.generate_unique_id();

        assert_ne!(a, b);
        let parsed = uuid::Uuid::parse_str(&a).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
