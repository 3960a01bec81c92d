use serde::Serialize;

// Status codes. Combine with bitwise OR: `DRAFT | PENDING_ENCODING | PENDING_REVIEW`.
pub const TRASH: i32 = 1;
pub const PUBLISH: i32 = 2;
pub const DRAFT: i32 = 4;
pub const PENDING_ENCODING: i32 = 8;
pub const PENDING_REVIEW: i32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub code: i32,
    pub label: &'static str,
    pub slug: &'static str,
}

/// Registered statuses, ordered by bit code.
pub const STATUSES: [StatusDescriptor; 5] = [
    StatusDescriptor {
        code: TRASH,
        label: "Trash",
        slug: "trash",
    },
    StatusDescriptor {
        code: PUBLISH,
        label: "Publish",
        slug: "publish",
    },
    StatusDescriptor {
        code: DRAFT,
        label: "Draft",
        slug: "draft",
    },
    StatusDescriptor {
        code: PENDING_ENCODING,
        label: "Pending Encoding",
        slug: "encode",
    },
    StatusDescriptor {
        code: PENDING_REVIEW,
        label: "Pending Review",
        slug: "review",
    },
];

/// A registered status together with whether its bit is set on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusFlag {
    #[serde(flatten)]
    pub status: StatusDescriptor,
    pub flag: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("Status {value} is outside the valid range 0..={max}")]
    OutOfRange { value: i32, max: i32 },
}

/// Highest integer every registered bit can span: `(highest code << 1) - 1`.
pub const fn max_status() -> i32 {
    let mut highest = 0;
    let mut i = 0;
    while i < STATUSES.len() {
        if STATUSES[i].code > highest {
            highest = STATUSES[i].code;
        }
        i += 1;
    }
    (highest << 1) - 1
}

/// Range check only. Any combination of registered bits is accepted, and so is
/// any integer below the bound even if it sets no registered bit.
pub fn validate_status(value: i32) -> Result<i32, StatusError> {
    let max = max_status();
    if !(0..=max).contains(&value) {
        return Err(StatusError::OutOfRange { value, max });
    }
    Ok(value)
}

pub fn lookup(code: i32) -> Option<&'static StatusDescriptor> {
    STATUSES.iter().find(|s| s.code == code)
}

pub fn flags_for(status: i32) -> Vec<StatusFlag> {
    STATUSES
        .iter()
        .map(|s| StatusFlag {
            status: *s,
            flag: status & s.code > 0,
        })
        .collect()
}
