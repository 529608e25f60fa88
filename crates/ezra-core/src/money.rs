//! Rent amounts as integer minor units.
//!
//! The backend stores rent in minor units (cents) and historically some views
//! divided by 100 while others did not. The canonical representation here is
//! minor units everywhere, including the wire; conversion to dollars happens
//! only at presentation edges via [`RentAmount::display_usd`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentAmount(i64);

impl RentAmount {
    pub const fn from_minor(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `from_major(1500)` is $1,500.00.
    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Presentation-edge formatting: "$1,500.00".
    pub fn display_usd(self) -> String {
        let cents = self.0 % 100;
        let whole = self.0 / 100;
        format!("${}.{:02}", group_thousands(whole), cents.abs())
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
