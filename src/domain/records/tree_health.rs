use uuid::Uuid;

use crate::domain::{
    codec::{canonical_token, display_token, empty_string, fill_string},
    record::{check_columns, DynamicRows, Record, RecordError},
};

/// One health assessment of a marked tree: crown and bole damage, each with
/// an estimated damage percentage.
///
/// Columns: `treeID, species, crownDamage, crownPercent, boleDamage,
/// bolePercent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeHealthRecord {
    id: Uuid,
    /// Field tag identifying the tree.
    pub tree_id: String,
    /// Common species name.
    pub species: String,
    /// Kind of damage seen in the crown.
    pub crown_damage: CrownDamage,
    /// Share of the crown affected.
    pub crown_percent: DamagePercent,
    /// Kind of damage seen on the bole.
    pub bole_damage: BoleDamage,
    /// Share of the bole affected.
    pub bole_percent: DamagePercent,
}

/// Damage categories for the crown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrownDamage {
    /// No visible damage.
    #[default]
    None,
    /// Damage confined to branches.
    Branches,
    /// Damage confined to foliage.
    Foliage,
    /// Both branches and foliage affected.
    Both,
}

/// Damage categories for the bole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoleDamage {
    /// No visible damage.
    #[default]
    None,
    /// Insect damage.
    Insect,
    /// Disease damage.
    Disease,
    /// Mechanical damage.
    Mechanical,
    /// Weather damage.
    Weather,
    /// All of the above.
    All,
    /// A cause not listed.
    Other,
}

/// Quartile buckets for an estimated damage share.
///
/// Stored as the literal range text; each bucket has exactly one spelling so
/// decode and encode are inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DamagePercent {
    /// 0% - 25%.
    #[default]
    UpToQuarter,
    /// 26% - 50%.
    UpToHalf,
    /// 51% - 75%.
    UpToThreeQuarters,
    /// 76% - 100%.
    UpToFull,
}

impl CrownDamage {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::None, Self::Branches, Self::Foliage, Self::Both];

    /// The canonical lowercase token for this category.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Branches => "branches",
            Self::Foliage => "foliage",
            Self::Both => "both",
        }
    }

    /// Matches a display or canonical form against the known categories.
    #[must_use]
    pub fn from_display(s: &str) -> Option<Self> {
        let token = canonical_token(&empty_string(s));
        Self::ALL.into_iter().find(|damage| damage.token() == token)
    }
}

impl BoleDamage {
    /// All categories, in display order.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Insect,
        Self::Disease,
        Self::Mechanical,
        Self::Weather,
        Self::All,
        Self::Other,
    ];

    /// The canonical lowercase token for this category.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Insect => "insect",
            Self::Disease => "disease",
            Self::Mechanical => "mechanical",
            Self::Weather => "weather",
            Self::All => "all",
            Self::Other => "other",
        }
    }

    /// Matches a display or canonical form against the known categories.
    #[must_use]
    pub fn from_display(s: &str) -> Option<Self> {
        let token = canonical_token(&empty_string(s));
        Self::ALL.into_iter().find(|damage| damage.token() == token)
    }
}

impl DamagePercent {
    /// All buckets, in ascending order.
    pub const ALL: [Self; 4] = [
        Self::UpToQuarter,
        Self::UpToHalf,
        Self::UpToThreeQuarters,
        Self::UpToFull,
    ];

    /// The literal range text stored on disk.
    #[must_use]
    pub const fn as_range(self) -> &'static str {
        match self {
            Self::UpToQuarter => "0% - 25%",
            Self::UpToHalf => "26% - 50%",
            Self::UpToThreeQuarters => "51% - 75%",
            Self::UpToFull => "76% - 100%",
        }
    }

    /// Matches the literal range text, the single spelling [`Self::as_range`]
    /// produces.
    #[must_use]
    pub fn from_range(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.as_range() == s)
    }
}

impl Default for TreeHealthRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            tree_id: String::new(),
            species: String::new(),
            crown_damage: CrownDamage::default(),
            crown_percent: DamagePercent::default(),
            bole_damage: BoleDamage::default(),
            bole_percent: DamagePercent::default(),
        }
    }
}

impl Record for TreeHealthRecord {
    const COLUMNS: usize = 6;

    fn id(&self) -> Uuid {
        self.id
    }

    fn decode(tokens: &[&str]) -> Result<Self, RecordError> {
        check_columns(tokens, Self::COLUMNS)?;

        let unknown = |token: &str| RecordError::UnknownValue(token.to_string());

        Ok(Self {
            id: Uuid::new_v4(),
            tree_id: empty_string(tokens[0]),
            species: empty_string(tokens[1]),
            crown_damage: CrownDamage::from_display(tokens[2]).ok_or_else(|| unknown(tokens[2]))?,
            crown_percent: DamagePercent::from_range(tokens[3])
                .ok_or_else(|| unknown(tokens[3]))?,
            bole_damage: BoleDamage::from_display(tokens[4]).ok_or_else(|| unknown(tokens[4]))?,
            bole_percent: DamagePercent::from_range(tokens[5]).ok_or_else(|| unknown(tokens[5]))?,
        })
    }

    fn encode(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            fill_string(&self.tree_id),
            fill_string(&self.species),
            display_token(self.crown_damage.token()),
            self.crown_percent.as_range(),
            display_token(self.bole_damage.token()),
            self.bole_percent.as_range()
        )
    }
}

impl DynamicRows for TreeHealthRecord {}
