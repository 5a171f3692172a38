// src/config/layout.rs
//! 盤面のレイアウトと、移動コマンドで使う記号の定数を定義するよ！
//! ヘッダー名を変えたくなったらここだけ直せばOK。

/// 移動コマンドの先頭に付ける記号。
pub const MOVE_MARKER: &str = "M";
/// 山札 (Stock) を指す記号。
pub const STOCK_MARKER: &str = "O";

/// 組札 (Stack pile) のヘッダー。4つ。
pub const STACK_HEADERS: [&str; 4] = ["SA", "SB", "SC", "SD"];
/// 場札 (Column) のヘッダー。7列。
pub const COLUMN_HEADERS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

pub const COLUMN_COUNT: usize = COLUMN_HEADERS.len();
pub const DECK_SIZE: usize = 52;

/// 列の中の行番号は最大2桁 (裏6枚 + 表13枚 = 19枚なので十分)
pub const MAX_ROW_DIGITS: usize = 2;

/// 構文エラーの時に一緒に返すヘルプ。
pub const HELP_TEXT: &str = "\
Move a card with: M <source> <destination>
  <source>      O (stock), SA-SD (stack pile) or a column coordinate such as C4
                (column A-G followed by the row of the card, counting from 0)
  <destination> SA-SD (stack pile) or a column A-G
Example: M O SA, M C4 F";
