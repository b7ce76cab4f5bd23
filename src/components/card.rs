// src/components/card.rs

// serde を使う宣言！カード情報をドラッグ＆ドロップのペイロードにしたり、ホストに渡したりするのに使うよ。
use serde::{Serialize, Deserialize};
use std::fmt;
use uuid::Uuid;

/// 裏向きカードの画像アセット名。
pub const CARD_BACK_IMAGE: &str = "CardBack";
/// テーブル背景の画像アセット名。
pub const TABLE_BACKGROUND_IMAGE: &str = "TableBackground";

/// カードのスート（マーク）を表す列挙型だよ！♠️❤️♦️♣️
///
/// - Hash: 組札 (Foundation) の HashMap のキーに使うから必須！
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
}

/// 全スートを決まった順番で並べた配列。デッキ作成や組札の並びはこの順番！
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// 画像アセット名に使う小文字の名前 ("spades" とか)。
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spade => "spades",
            Suit::Heart => "hearts",
            Suit::Diamond => "diamonds",
            Suit::Club => "clubs",
        }
    }

    /// 表示用の名前 ("Spades" とか)。`Card::name()` で使うよ。
    pub fn display_name(self) -> &'static str {
        match self {
            Suit::Spade => "Spades",
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
        }
    }

    /// `ALL_SUITS` の中での位置 (0-3)。組札の並び順に使う。
    pub fn index(self) -> usize {
        match self {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Diamond => 2,
            Suit::Club => 3,
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// A = 1 から K = 13 まで。PartialOrd, Ord でランクの大小比較もできる！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全ランクを A から K の順番で並べた配列。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 数値としての値 (Ace=1 .. King=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 値からランクを逆引きするよ。範囲外なら None！
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.iter().copied().find(|rank| rank.value() == value)
    }

    /// 画像アセット名や表示名に使う名前 ("2".."10", "Jack", "Queen", "King", "Ace")。
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

/// カード1枚1枚を区別するための一意な ID だよ。中身は UUID v4！
/// 同じ「スペードのA」でも、ID を見ればどのカードか確実にわかる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub Uuid);

impl CardId {
    /// 新しいランダムな ID を作る。
    pub fn new() -> Self {
        CardId(Uuid::new_v4())
    }

    /// 文字列 (ホストから来る ID) をパースする。
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let uuid = Uuid::parse_str(input.trim())
            .map_err(|e| anyhow::anyhow!("invalid card id {:?}: {}", input, e))?;
        Ok(CardId(uuid))
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// - `id`: カードの一意な ID
/// - `rank`, `suit`: ランクとスート (作ったあとは変わらない)
/// - `is_face_up`: 表向きかどうか。これだけは後から変わる！
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub is_face_up: bool,
}

impl Card {
    /// 新しいカードを表向きで作るよ。ID は自動で振られる。
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { id: CardId::new(), rank, suit, is_face_up: true }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// "Ace of Spades" みたいな表示名。
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.display_name())
    }

    /// 描画に使う画像アセット名。表向きなら "Ace_spades"、裏向きなら "CardBack"。
    pub fn image_name(&self) -> String {
        if self.is_face_up {
            format!("{}_{}", self.rank.name(), self.suit.name())
        } else {
            CARD_BACK_IMAGE.to_string()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
