use serde::{de, ser};

use super::*;
use crate::util::common::{tile_number_from_char, tile_type_from_char};

// 牌種 34種類のいずれか
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKind(pub Type, pub Tnum); // (type index, number index)

impl TileKind {
    // 牌種として有効な値の場合のみSomeを返却
    pub fn new(ti: Type, ni: Tnum) -> Option<Self> {
        let max = match ti {
            TM | TP | TS => 9,
            TZ => DR,
            _ => return None,
        };
        if (1..=max).contains(&ni) {
            Some(Self(ti, ni))
        } else {
            None
        }
    }

    // "m1", "z7"のような表記から変換
    pub fn from_symbol(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let ti = tile_type_from_char(chars.next()?)?;
        let ni = tile_number_from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(ti, ni)
    }

    // 0~33の通し番号
    pub fn index(&self) -> Index {
        self.0 * 9 + self.1 - 1
    }

    pub fn from_index(i: Index) -> Option<Self> {
        if i >= KIND {
            return None;
        }
        Self::new(i / 9, i % 9 + 1)
    }

    // 34種すべての牌種 (萬子1 → 中 の順)
    pub fn all() -> impl Iterator<Item = Self> {
        (0..KIND).filter_map(Self::from_index)
    }

    // 順子で次に続く牌 (字牌と9は存在しない)
    pub fn next(&self) -> Option<Self> {
        if self.is_suit() {
            Self::new(self.0, self.1 + 1)
        } else {
            None
        }
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        !self.is_honor()
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.0 == TZ
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_suit() && (self.1 == 1 || self.1 == 9)
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        self.0 == TZ && self.1 <= WN
    }

    // 三元牌
    #[inline]
    pub fn is_doragon(&self) -> bool {
        self.0 == TZ && DW <= self.1 && self.1 <= DR
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ['m', 'p', 's', 'z'][self.0], self.1)
    }
}

impl fmt::Debug for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialOrd for TileKind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TileKind {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl ser::Serialize for TileKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileKindVisitor;

impl<'de> de::Visitor<'de> for TileKindVisitor {
    type Value = TileKind;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        TileKind::from_symbol(v).ok_or_else(|| E::custom(format!("invalid tile symbol: {}", v)))
    }
}

impl<'de> de::Deserialize<'de> for TileKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileKindVisitor)
    }
}

// 物理的な牌 (同種4枚のうちどれか)
// copyは点数計算には影響しない
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    pub kind: TileKind,
    pub copy: Index, // 0~3
}

impl Tile {
    pub fn new(kind: TileKind, copy: Index) -> Self {
        assert!(copy < TILE);
        Self { kind, copy }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.copy)
    }
}

// [TileTable]
// 牌種ごとの枚数 index0は未使用
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

#[test]
fn test_tile_kind_index() {
    for (i, k) in TileKind::all().enumerate() {
        assert_eq!(i, k.index());
        assert_eq!(Some(k), TileKind::from_index(i));
    }
    assert_eq!(KIND, TileKind::all().count());
    assert_eq!(None, TileKind::from_index(KIND));
}

#[test]
fn test_tile_kind_symbol() {
    assert_eq!(Some(TileKind(TS, 9)), TileKind::from_symbol("s9"));
    assert_eq!(Some(TileKind(TZ, DR)), TileKind::from_symbol("z7"));
    assert_eq!(None, TileKind::from_symbol("z8"));
    assert_eq!(None, TileKind::from_symbol("m0"));
    assert_eq!(None, TileKind::from_symbol("m12"));
    assert_eq!("p5", TileKind(TP, 5).to_string());

    let k: TileKind = serde_json::from_str("\"z5\"").unwrap();
    assert!(k.is_doragon());
    assert!(serde_json::from_str::<TileKind>("\"x1\"").is_err());
}

#[test]
fn test_tile_kind_class() {
    assert!(TileKind(TM, 1).is_terminal());
    assert!(TileKind(TS, 9).is_terminal());
    assert!(!TileKind(TP, 5).is_terminal());
    assert!(!TileKind(TZ, WE).is_terminal());
    assert!(TileKind(TZ, WN).is_wind());
    assert!(!TileKind(TZ, DW).is_wind());
    assert!(!TileKind(TM, 1).is_wind());
    assert!(TileKind(TZ, DR).is_honor());
    assert!(!TileKind(TZ, DR).is_suit());
}

#[test]
fn test_tile_kind_next() {
    assert_eq!(Some(TileKind(TM, 8)), TileKind(TM, 7).next());
    assert_eq!(None, TileKind(TM, 9).next());
    assert_eq!(None, TileKind(TZ, WE).next());
}
