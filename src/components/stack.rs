// src/components/stack.rs

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::components::card::Suit;

/// カードが存在する場所の種類を示す Enum だよ。
/// 山札にあるのか、場札の何列目にあるのか、どのスートの組札にあるのか、を区別する。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。列番号 (0 始まり) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。スートごとに1つずつ。
    Foundation(Suit),
    /// 山札 (Stock)。まだ配られていないカード置き場。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

impl StackType {
    /// 場札なら列番号を返す。
    pub fn tableau_index(self) -> Option<usize> {
        match self {
            StackType::Tableau(index) => Some(index as usize),
            _ => None,
        }
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Tableau(index) => write!(f, "tableau[{}]", index),
            StackType::Foundation(suit) => write!(f, "foundation[{}]", suit.name()),
            StackType::Stock => f.write_str("stock"),
            StackType::Waste => f.write_str("waste"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tableau_index_only_for_tableau() {
        assert_eq!(StackType::Tableau(2).tableau_index(), Some(2));
        assert_eq!(StackType::Foundation(Suit::Heart).tableau_index(), None);
        assert_eq!(StackType::Waste.tableau_index(), None);
        assert!(StackType::Tableau(0).is_tableau());
        assert!(!StackType::Stock.is_tableau());
    }

    #[test]
    fn stack_type_json_shape() {
        // ホストとやり取りする形をここで固定しておく
        let json = serde_json::to_string(&StackType::Tableau(3)).unwrap();
        assert_eq!(json, r#"{"Tableau":3}"#);
        let json = serde_json::to_string(&StackType::Foundation(Suit::Club)).unwrap();
        assert_eq!(json, r#"{"Foundation":"Club"}"#);
        let back: StackType = serde_json::from_str(r#""Waste""#).unwrap();
        assert_eq!(back, StackType::Waste);
    }
}
