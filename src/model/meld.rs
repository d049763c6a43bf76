use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MeldType {
    Sequence, // 順子
    Triplet,  // 刻子
}

// 面子 tileは順子の場合は先頭の牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Meld {
    #[serde(rename = "type")]
    pub meld_type: MeldType,
    pub tile: TileKind,
}

impl Meld {
    pub fn sequence(tile: TileKind) -> Self {
        assert!(tile.is_suit() && tile.1 <= 7);
        Self {
            meld_type: MeldType::Sequence,
            tile,
        }
    }

    pub fn triplet(tile: TileKind) -> Self {
        Self {
            meld_type: MeldType::Triplet,
            tile,
        }
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        self.meld_type == MeldType::Sequence
    }

    #[inline]
    pub fn is_triplet(&self) -> bool {
        self.meld_type == MeldType::Triplet
    }

    // 面子を構成する3枚
    pub fn kinds(&self) -> [TileKind; 3] {
        let t = self.tile;
        match self.meld_type {
            MeldType::Sequence => [t, TileKind(t.0, t.1 + 1), TileKind(t.0, t.1 + 2)],
            MeldType::Triplet => [t, t, t],
        }
    }

    pub fn contains(&self, k: TileKind) -> bool {
        self.kinds().contains(&k)
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.kinds();
        write!(f, "{}{}{}{}", ['m', 'p', 's', 'z'][a.0], a.1, b.1, c.1)
    }
}

// 和了形の分解 (4面子 + 1雀頭)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Partition {
    pub melds: Vec<Meld>,
    pub pair: TileKind,
}

impl Partition {
    pub fn new(melds: Vec<Meld>, pair: TileKind) -> Self {
        assert_eq!(SET, melds.len());
        Self { melds, pair }
    }

    // 分解に使用されている牌の枚数
    pub fn tile_table(&self) -> TileTable {
        let mut tt = TileTable::default();
        for m in &self.melds {
            for k in m.kinds() {
                tt[k.0][k.1] += 1;
            }
        }
        tt[self.pair.0][self.pair.1] += 2;
        tt
    }

    pub fn count_sequences(&self) -> usize {
        self.melds.iter().filter(|m| m.is_sequence()).count()
    }

    pub fn count_triplets(&self) -> usize {
        self.melds.iter().filter(|m| m.is_triplet()).count()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.melds {
            write!(f, "{} ", m)?;
        }
        write!(f, "{}{}", self.pair, self.pair.1)
    }
}

#[test]
fn test_partition_tile_table() {
    let p = Partition::new(
        vec![
            Meld::sequence(TileKind(TM, 1)),
            Meld::sequence(TileKind(TM, 1)),
            Meld::triplet(TileKind(TZ, DW)),
            Meld::sequence(TileKind(TS, 7)),
        ],
        TileKind(TP, 5),
    );
    let tt = p.tile_table();
    assert_eq!(2, tt[TM][1]);
    assert_eq!(3, tt[TZ][DW]);
    assert_eq!(2, tt[TP][5]);
    assert_eq!(1, tt[TS][9]);
    let total: usize = tt.iter().map(|r| r.iter().sum::<usize>()).sum();
    assert_eq!(HAND, total);
    assert_eq!(3, p.count_sequences());
    assert_eq!(1, p.count_triplets());
    assert_eq!("m123 m123 z555 s789 p55", p.to_string());
}
