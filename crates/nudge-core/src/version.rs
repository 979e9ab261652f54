use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A dotted numeric version such as `2.10.0`.
///
/// Any number of components is accepted. Missing trailing components compare
/// as `0`, so `2`, `2.0` and `2.0.0` are all equal.
#[derive(Debug, Clone)]
pub struct AppVersion {
    components: Vec<u64>,
}

impl AppVersion {
    #[must_use]
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    #[error("Expected a dotted numeric version, got an empty string")]
    Empty,
    #[error("Invalid component {index} in version {input:?}: {value:?}")]
    InvalidComponent {
        input: String,
        index: usize,
        value: String,
    },
}

impl FromStr for AppVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let components = s
            .split('.')
            .enumerate()
            .map(|(index, part)| parse_component(part).ok_or_else(|| invalid(s, index, part)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }
}

// `u64::from_str` accepts a leading `+`, so digits are checked first.
fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn invalid(input: &str, index: usize, value: &str) -> VersionParseError {
    VersionParseError::InvalidComponent {
        input: input.to_string(),
        index,
        value: value.to_string(),
    }
}

impl Ord for AppVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|idx| self.component(idx).cmp(&other.component(idx)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for AppVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AppVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for AppVersion {}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}

/// Compare two dotted version strings numerically, component by component.
///
/// # Errors
/// Returns [`VersionParseError`] when either input has a component that is
/// not a non-negative integer.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, VersionParseError> {
    let a: AppVersion = a.parse()?;
    let b: AppVersion = b.parse()?;
    Ok(a.cmp(&b))
}
