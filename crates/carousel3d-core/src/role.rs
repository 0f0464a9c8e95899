#![forbid(unsafe_code)]

//! Display roles and the pure role-computation function.
//!
//! Every slide in a carousel occupies one of six display slots relative to the
//! active slide. [`compute_role`] derives that slot from the signed distance
//! between a slide and the active slide, optionally normalized around the
//! circle when the carousel loops.
//!
//! # Invariants
//!
//! 1. For `slide_count >= 1` and an in-range active index, exactly one index
//!    maps to [`Role::Active`].
//! 2. At most one index maps to each of the four neighbour roles.
//! 3. The mapping is pure: the same arguments always produce the same role.
//!
//! # Tie rule
//!
//! In a looping carousel with an even slide count the slide exactly half the
//! ring away is reachable by either direction. It always takes the right-hand
//! role: [`Role::AdjacentRight`] for two slides, [`Role::BackRight`] for four,
//! and [`Role::Hidden`] for six or more. This falls out of the branch order
//! below (right-hand checks run first and include the wrapped equivalents),
//! and is pinned by tests.

use std::fmt;

/// Display slot assigned to a slide relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// The front-facing slide.
    Active,
    /// Immediately to the right of the active slide.
    AdjacentRight,
    /// Immediately to the left of the active slide.
    AdjacentLeft,
    /// Two positions to the right, pushed back.
    BackRight,
    /// Two positions to the left, pushed back.
    BackLeft,
    /// Not displayed.
    #[default]
    Hidden,
}

impl Role {
    /// All roles in branch-evaluation order.
    pub const ALL: [Self; 6] = [
        Self::Active,
        Self::AdjacentRight,
        Self::AdjacentLeft,
        Self::BackRight,
        Self::BackLeft,
        Self::Hidden,
    ];

    /// Stable class name a rendering sink can attach to the slide element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::AdjacentRight => "right",
            Self::AdjacentLeft => "left",
            Self::BackRight => "back-right",
            Self::BackLeft => "back-left",
            Self::Hidden => "hidden",
        }
    }

    /// Whether the slide is drawn at all.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Signed distance from the active slide, normalized around the ring when
/// `looping` is set.
///
/// The midpoint comparison is real-valued (`diff > n / 2`), done here as
/// `2 * diff > n` to stay in integers.
#[must_use]
pub fn position_diff(index: usize, active_index: usize, slide_count: usize, looping: bool) -> i64 {
    let n = slide_count as i64;
    let mut diff = index as i64 - active_index as i64;
    if looping {
        if 2 * diff > n {
            diff -= n;
        } else if 2 * diff < -n {
            diff += n;
        }
    }
    diff
}

/// Compute the display role of `index` for the given carousel state.
///
/// Indices outside `[0, slide_count)` are [`Role::Hidden`].
#[must_use]
pub fn compute_role(index: usize, active_index: usize, slide_count: usize, looping: bool) -> Role {
    if index >= slide_count {
        return Role::Hidden;
    }
    let n = slide_count as i64;
    let diff = position_diff(index, active_index, slide_count, looping);
    // Wrapped equivalents only count when the carousel loops.
    let wraps_to = |target: i64| looping && diff == target;

    if diff == 0 {
        Role::Active
    } else if diff == 1 || wraps_to(-(n - 1)) {
        Role::AdjacentRight
    } else if diff == -1 || wraps_to(n - 1) {
        Role::AdjacentLeft
    } else if diff == 2 || wraps_to(-(n - 2)) {
        Role::BackRight
    } else if diff == -2 || wraps_to(n - 2) {
        Role::BackLeft
    } else {
        Role::Hidden
    }
}

/// Roles for every slide of one carousel state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleAssignment {
    roles: Vec<Role>,
}

impl RoleAssignment {
    /// Compute the assignment for all `slide_count` slides.
    #[must_use]
    pub fn compute(active_index: usize, slide_count: usize, looping: bool) -> Self {
        let roles = (0..slide_count)
            .map(|index| compute_role(index, active_index, slide_count, looping))
            .collect();
        Self { roles }
    }

    /// Role of slide `index`, or `None` if out of range.
    #[must_use]
    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.roles.get(index).copied()
    }

    /// First slide holding `role`.
    #[must_use]
    pub fn index_of(&self, role: Role) -> Option<usize> {
        self.roles.iter().position(|&r| r == role)
    }

    /// Number of slides that are drawn.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.roles.iter().filter(|r| r.is_visible()).count()
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Roles in slide order.
    #[must_use]
    pub fn as_slice(&self) -> &[Role] {
        &self.roles
    }

    /// Iterate `(index, role)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Role)> + '_ {
        self.roles.iter().copied().enumerate()
    }
}

impl std::ops::Index<usize> for RoleAssignment {
    type Output = Role;

    fn index(&self, index: usize) -> &Self::Output {
        &self.roles[index]
    }
}
