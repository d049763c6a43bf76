use crate::model::*;

pub fn tile_type_from_char(c: char) -> Option<Type> {
    Some(match c {
        'm' => TM,
        'p' => TP,
        's' => TS,
        'z' => TZ,
        _ => return None,
    })
}

pub fn tile_number_from_char(c: char) -> Option<Tnum> {
    c.to_digit(10).map(|n| n as Tnum)
}

pub fn inc_tile(tt: &mut TileTable, k: TileKind) {
    tt[k.0][k.1] += 1;
}

pub fn dec_tile(tt: &mut TileTable, k: TileKind) {
    assert!(tt[k.0][k.1] > 0);
    tt[k.0][k.1] -= 1;
}

pub fn count_tiles(tt: &TileTable) -> usize {
    tt.iter().map(|tr| tr[1..].iter().sum::<usize>()).sum()
}

pub fn kinds_to_tile_table(kinds: &[TileKind]) -> TileTable {
    let mut tt = TileTable::default();
    for &k in kinds {
        inc_tile(&mut tt, k);
    }
    tt
}

// 牌種のリストに出現順で0~3のcopy番号を振る
// 同種5枚目以降はNoneを返却
pub fn tiles_from_kinds(kinds: &[TileKind]) -> Option<Vec<Tile>> {
    let mut tt = TileTable::default();
    let mut tiles = vec![];
    for &k in kinds {
        let c = tt[k.0][k.1];
        if c >= TILE {
            return None;
        }
        tiles.push(Tile::new(k, c));
        tt[k.0][k.1] += 1;
    }
    Some(tiles)
}

// "m123p456s789z11" のような表記を牌種のリストに変換
pub fn kinds_from_string(exp: &str) -> Result<Vec<TileKind>, String> {
    let mut kinds = vec![];
    let mut ti = None;
    for c in exp.chars() {
        match c {
            'm' | 'p' | 's' | 'z' => ti = tile_type_from_char(c),
            '0'..='9' => {
                let ti = match ti {
                    Some(ti) => ti,
                    None => return Err("tile number befor tile type".to_string()),
                };
                let ni = tile_number_from_char(c).unwrap_or(0);
                match TileKind::new(ti, ni) {
                    Some(k) => kinds.push(k),
                    None => return Err(format!("invalid tile: {}{}", ['m', 'p', 's', 'z'][ti], c)),
                }
            }
            _ => {
                return Err(format!("invalid char: '{}'", c));
            }
        }
    }
    Ok(kinds)
}

pub fn vec_to_string<T: std::fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

#[test]
fn test_kinds_from_string() {
    let kinds = kinds_from_string("p34777s123567z66").unwrap();
    assert_eq!(14, kinds.len());
    assert_eq!(TileKind(TP, 3), kinds[0]);
    assert_eq!(TileKind(TZ, DG), kinds[13]);

    let tt = kinds_to_tile_table(&kinds);
    assert_eq!(14, count_tiles(&tt));
    assert_eq!(3, tt[TP][7]);

    assert!(kinds_from_string("123").is_err());
    assert!(kinds_from_string("m0").is_err());
    assert!(kinds_from_string("z8").is_err());
    assert!(kinds_from_string("m1x").is_err());
}

#[test]
fn test_tiles_from_kinds() {
    let k = TileKind(TM, 1);
    let tiles = tiles_from_kinds(&[k, TileKind(TM, 2), k, k]).unwrap();
    let copies: Vec<Index> = tiles.iter().map(|t| t.copy).collect();
    assert_eq!(vec![0, 0, 1, 2], copies);
    assert!(tiles_from_kinds(&[k; 5]).is_none());
}
