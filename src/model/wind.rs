use super::*;

// 風 (場風, 自風)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Wind {
    #[default]
    East,
    South,
    West,
    North,
}

impl Wind {
    // 字牌の数字部分 (東: 1, 南: 2, 西: 3, 北: 4)
    pub fn tnum(self) -> Tnum {
        match self {
            Wind::East => WE,
            Wind::South => WS,
            Wind::West => WW,
            Wind::North => WN,
        }
    }

    pub fn from_tnum(ni: Tnum) -> Option<Self> {
        Some(match ni {
            WE => Wind::East,
            WS => Wind::South,
            WW => Wind::West,
            WN => Wind::North,
            _ => return None,
        })
    }

    pub fn tile_kind(self) -> TileKind {
        TileKind(TZ, self.tnum())
    }

    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'E' => Wind::East,
            'S' => Wind::South,
            'W' => Wind::West,
            'N' => Wind::North,
            _ => return None,
        })
    }

    // 1~4 または 27~30 (136枚表記の字牌の牌種番号)
    pub fn from_number(n: u64) -> Option<Self> {
        match n {
            1..=4 => Self::from_tnum(n as Tnum),
            27..=30 => Self::from_tnum((n - 26) as Tnum),
            _ => None,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        if let Ok(n) = s.parse::<u64>() {
            return Self::from_number(n);
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c.to_ascii_uppercase());
        }
        Some(match s.to_ascii_lowercase().as_str() {
            "east" => Wind::East,
            "south" => Wind::South,
            "west" => Wind::West,
            "north" => Wind::North,
            _ => return None,
        })
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = ['E', 'S', 'W', 'N'][self.tnum() - 1];
        write!(f, "{}", c)
    }
}

#[test]
fn test_wind_from_name() {
    let ws: Vec<Option<Wind>> = ["E", "south", "3", "30", "28", "n"]
        .into_iter()
        .map(Wind::from_name)
        .collect();
    assert_eq!(
        vec![
            Some(Wind::East),
            Some(Wind::South),
            Some(Wind::West),
            Some(Wind::North),
            Some(Wind::South),
            Some(Wind::North)
        ],
        ws
    );
    assert_eq!(None, Wind::from_number(5));
    assert_eq!(None, Wind::from_name("X"));
    assert_eq!(None, Wind::from_name(""));
    assert_eq!("N", Wind::North.to_string());
}
