//! Traditional (King Wen) sequence numbers and names.
//!
//! Clean-room: the 64-hexagram sequence is public-domain tradition.

use serde::Serialize;

use crate::hexagram::Hexagram;

/// King Wen number indexed by `[upper id - 1][lower id - 1]`, both in the
/// Xiantian trigram order Qian, Dui, Li, Zhen, Xun, Kan, Gen, Kun.
const KING_WEN: [[u8; 8]; 8] = [
    [1, 10, 13, 25, 44, 6, 33, 12],
    [43, 58, 49, 17, 28, 47, 31, 45],
    [14, 38, 30, 21, 50, 64, 56, 35],
    [34, 54, 55, 51, 32, 40, 62, 16],
    [9, 61, 37, 42, 57, 59, 53, 20],
    [5, 60, 63, 3, 48, 29, 39, 8],
    [26, 41, 22, 27, 18, 4, 52, 23],
    [11, 19, 36, 24, 46, 7, 15, 2],
];

/// Name of a hexagram in the traditional sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HexagramName {
    pub number: u8,
    pub name: &'static str,
    pub chinese: &'static str,
}

const NAMES: [(&str, &str); 64] = [
    ("Qian", "乾"),
    ("Kun", "坤"),
    ("Zhun", "屯"),
    ("Meng", "蒙"),
    ("Xu", "需"),
    ("Song", "讼"),
    ("Shi", "师"),
    ("Bi", "比"),
    ("Xiao Chu", "小畜"),
    ("Lü", "履"),
    ("Tai", "泰"),
    ("Pi", "否"),
    ("Tong Ren", "同人"),
    ("Da You", "大有"),
    ("Qian", "谦"),
    ("Yu", "豫"),
    ("Sui", "随"),
    ("Gu", "蛊"),
    ("Lin", "临"),
    ("Guan", "观"),
    ("Shi He", "噬嗑"),
    ("Bi", "贲"),
    ("Bo", "剥"),
    ("Fu", "复"),
    ("Wu Wang", "无妄"),
    ("Da Chu", "大畜"),
    ("Yi", "颐"),
    ("Da Guo", "大过"),
    ("Kan", "坎"),
    ("Li", "离"),
    ("Xian", "咸"),
    ("Heng", "恒"),
    ("Dun", "遁"),
    ("Da Zhuang", "大壮"),
    ("Jin", "晋"),
    ("Ming Yi", "明夷"),
    ("Jia Ren", "家人"),
    ("Kui", "睽"),
    ("Jian", "蹇"),
    ("Xie", "解"),
    ("Sun", "损"),
    ("Yi", "益"),
    ("Guai", "夬"),
    ("Gou", "姤"),
    ("Cui", "萃"),
    ("Sheng", "升"),
    ("Kun", "困"),
    ("Jing", "井"),
    ("Ge", "革"),
    ("Ding", "鼎"),
    ("Zhen", "震"),
    ("Gen", "艮"),
    ("Jian", "渐"),
    ("Gui Mei", "归妹"),
    ("Feng", "丰"),
    ("Lü", "旅"),
    ("Xun", "巽"),
    ("Dui", "兑"),
    ("Huan", "涣"),
    ("Jie", "节"),
    ("Zhong Fu", "中孚"),
    ("Xiao Guo", "小过"),
    ("Ji Ji", "既济"),
    ("Wei Ji", "未济"),
];

/// King Wen sequence number (1..=64) of a hexagram.
pub fn king_wen_number(hexagram: &Hexagram) -> u8 {
    let upper = usize::from(hexagram.upper_trigram.id - 1);
    let lower = usize::from(hexagram.lower_trigram.id - 1);
    KING_WEN[upper][lower]
}

/// Sequence number and name of a hexagram.
pub fn king_wen_name(hexagram: &Hexagram) -> HexagramName {
    let number = king_wen_number(hexagram);
    let (name, chinese) = NAMES[usize::from(number - 1)];
    HexagramName {
        number,
        name,
        chinese,
    }
}
