//! Stable error-code taxonomy for persistence failures.
//!
//! # Responsibility
//! - Register one code per gateway operation per entity kind.
//! - Resolve codes to operator-facing messages.
//!
//! # Invariants
//! - The table is static data; it is never mutated after compilation.
//! - Code strings are stable and unique; callers and logs key off them,
//!   never off the message text.

use std::fmt::{Display, Formatter};

/// Failure code attached to every `PersistenceFailure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    WorkerCreate,
    WorkerFetch,
    WorkerFetchAll,
    WorkerUpdate,
    WorkerDelete,
    WorkerDeleteAll,
    WorkerPhoneLookup,
    WorkerEmailLookup,
    LocationCreate,
    LocationFetch,
    LocationFetchAll,
    LocationUpdate,
    LocationDelete,
    LocationDeleteAll,
    InitiativeCreate,
    InitiativeFetch,
    InitiativeFetchAll,
    InitiativeUpdate,
    InitiativeDelete,
    InitiativeDeleteAll,
}

struct ErrorEntry {
    code: ErrorCode,
    key: &'static str,
    message: &'static str,
}

const ERROR_TABLE: &[ErrorEntry] = &[
    ErrorEntry {
        code: ErrorCode::WorkerCreate,
        key: "ERROR_CODE_001",
        message: "Worker was not created",
    },
    ErrorEntry {
        code: ErrorCode::WorkerFetch,
        key: "ERROR_CODE_002",
        message: "Worker could not be displayed",
    },
    ErrorEntry {
        code: ErrorCode::WorkerFetchAll,
        key: "ERROR_CODE_003",
        message: "Workers could not be displayed",
    },
    ErrorEntry {
        code: ErrorCode::WorkerUpdate,
        key: "ERROR_CODE_004",
        message: "Worker was not updated",
    },
    ErrorEntry {
        code: ErrorCode::WorkerDelete,
        key: "ERROR_CODE_005",
        message: "Worker was not deleted",
    },
    ErrorEntry {
        code: ErrorCode::WorkerDeleteAll,
        key: "ERROR_CODE_006",
        message: "Workers were not deleted",
    },
    ErrorEntry {
        code: ErrorCode::WorkerPhoneLookup,
        key: "ERROR_CODE_007",
        message: "Could not check duplicate phone number",
    },
    ErrorEntry {
        code: ErrorCode::WorkerEmailLookup,
        key: "ERROR_CODE_008",
        message: "Could not check duplicate email",
    },
    ErrorEntry {
        code: ErrorCode::LocationCreate,
        key: "ERROR_CODE_009",
        message: "Location was not created",
    },
    ErrorEntry {
        code: ErrorCode::LocationFetch,
        key: "ERROR_CODE_010",
        message: "Location could not be displayed",
    },
    ErrorEntry {
        code: ErrorCode::LocationFetchAll,
        key: "ERROR_CODE_011",
        message: "Locations could not be displayed",
    },
    ErrorEntry {
        code: ErrorCode::LocationUpdate,
        key: "ERROR_CODE_012",
        message: "Location was not updated",
    },
    ErrorEntry {
        code: ErrorCode::LocationDelete,
        key: "ERROR_CODE_013",
        message: "Location was not deleted",
    },
    ErrorEntry {
        code: ErrorCode::LocationDeleteAll,
        key: "ERROR_CODE_014",
        message: "Locations were not deleted",
    },
    ErrorEntry {
        code: ErrorCode::InitiativeCreate,
        key: "ERROR_CODE_015",
        message: "Initiative was not created",
    },
    ErrorEntry {
        code: ErrorCode::InitiativeFetch,
        key: "ERROR_CODE_016",
        message: "Initiative could not be displayed",
    },
    ErrorEntry {
        code: ErrorCode::InitiativeFetchAll,
        key: "ERROR_CODE_017",
        message: "Initiatives could not be displayed",
    },
    ErrorEntry {
        code: ErrorCode::InitiativeUpdate,
        key: "ERROR_CODE_018",
        message: "Initiative was not updated",
    },
    ErrorEntry {
        code: ErrorCode::InitiativeDelete,
        key: "ERROR_CODE_019",
        message: "Initiative was not deleted",
    },
    ErrorEntry {
        code: ErrorCode::InitiativeDeleteAll,
        key: "ERROR_CODE_020",
        message: "Initiatives were not deleted",
    },
];

impl ErrorCode {
    /// Stable short code, e.g. `ERROR_CODE_004`.
    pub fn as_str(self) -> &'static str {
        entry_for(self).key
    }

    /// Human-readable message registered for this code.
    pub fn message(self) -> &'static str {
        entry_for(self).message
    }

    /// Resolves a short code string back to its variant.
    pub fn from_code(key: &str) -> Option<Self> {
        ERROR_TABLE
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.code)
    }

    /// Iterates every registered code in table order.
    pub fn all() -> impl Iterator<Item = ErrorCode> {
        ERROR_TABLE.iter().map(|entry| entry.code)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn entry_for(code: ErrorCode) -> &'static ErrorEntry {
    let index = match code {
        ErrorCode::WorkerCreate => 0,
        ErrorCode::WorkerFetch => 1,
        ErrorCode::WorkerFetchAll => 2,
        ErrorCode::WorkerUpdate => 3,
        ErrorCode::WorkerDelete => 4,
        ErrorCode::WorkerDeleteAll => 5,
        ErrorCode::WorkerPhoneLookup => 6,
        ErrorCode::WorkerEmailLookup => 7,
        ErrorCode::LocationCreate => 8,
        ErrorCode::LocationFetch => 9,
        ErrorCode::LocationFetchAll => 10,
        ErrorCode::LocationUpdate => 11,
        ErrorCode::LocationDelete => 12,
        ErrorCode::LocationDeleteAll => 13,
        ErrorCode::InitiativeCreate => 14,
        ErrorCode::InitiativeFetch => 15,
        ErrorCode::InitiativeFetchAll => 16,
        ErrorCode::InitiativeUpdate => 17,
        ErrorCode::InitiativeDelete => 18,
        ErrorCode::InitiativeDeleteAll => 19,
    };
    &ERROR_TABLE[index]
}

#[cfg(test)]
mod tests {
    use super::{entry_for, ErrorCode, ERROR_TABLE};
    use std::collections::HashSet;

    #[test]
    fn table_registers_twenty_unique_codes() {
        assert_eq!(ERROR_TABLE.len(), 20);

        let keys: HashSet<_> = ERROR_TABLE.iter().map(|entry| entry.key).collect();
        assert_eq!(keys.len(), 20);

        let variants: HashSet<_> = ErrorCode::all().collect();
        assert_eq!(variants.len(), 20);
    }

    #[test]
    fn every_variant_resolves_to_its_own_row() {
        for code in ErrorCode::all() {
            assert_eq!(entry_for(code).code, code);
            assert_eq!(ErrorCode::from_code(code.as_str()), Some(code));
        }
    }

    #[test]
    fn codes_follow_operation_order_per_entity() {
        assert_eq!(ErrorCode::WorkerCreate.as_str(), "ERROR_CODE_001");
        assert_eq!(ErrorCode::WorkerEmailLookup.as_str(), "ERROR_CODE_008");
        assert_eq!(ErrorCode::LocationCreate.as_str(), "ERROR_CODE_009");
        assert_eq!(ErrorCode::InitiativeUpdate.as_str(), "ERROR_CODE_018");
        assert_eq!(ErrorCode::InitiativeDeleteAll.as_str(), "ERROR_CODE_020");
        assert_eq!(ErrorCode::WorkerUpdate.message(), "Worker was not updated");
    }

    #[test]
    fn unknown_code_is_absent() {
        assert_eq!(ErrorCode::from_code("ERROR_CODE_999"), None);
    }
}
