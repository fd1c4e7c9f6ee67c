//! プロンプト定義
//!
//! CLIとWeb(WASM)で共有される資源ごみ判定用の指示文

/// 資源区分（プロンプトに列挙する分類）
pub const RECYCLING_CATEGORIES: &[&str] = &[
    "Recyclable",
    "Compostable",
    "Hazardous / special drop-off",
    "Landfill",
];

/// 画像解析用プロンプト生成
///
/// 画像内の品目ごとに素材と資源区分を番号付きリストで返すよう指示する。
/// 応答はそのまま表示するため、JSONは要求しない。
pub fn build_recycling_prompt() -> String {
    let categories = RECYCLING_CATEGORIES.join(", ");

    format!(
        r#"Analyze this image and identify every item that could be disposed of or recycled.

For each item, give:
- the item name
- its material type (e.g. PET plastic, HDPE, aluminium, glass, cardboard, paper, organic)
- its recycling category, chosen from: {categories}

Answer as a numbered list in this format:
1. <item> - <category> (<material>)

If no disposable items are visible, say so in one sentence.
Do not add any other commentary."#
    )
}
