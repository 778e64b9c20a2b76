//! Types Module
//!
//! クレート内部で使用する共通データ型を定義するモジュール。

use std::collections::HashMap;

/// 1行分の生レコード
///
/// 列名から値へのマッピングです。値が存在しないセル（空セル、空文字列、
/// エラーセル）はエントリ自体を持ちません。「存在しない」の判定は
/// ワークブックの読み込み時に一度だけ行われ、以降の処理は
/// `Option`の有無だけを見ます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRecord {
    /// データ行番号（ヘッダー行を除く1始まり）
    pub row: u32,

    /// 列名 → 値（存在する値のみ）
    values: HashMap<String, String>,
}

impl RawRecord {
    /// 新しい空のレコードを生成
    pub fn new(row: u32) -> Self {
        Self {
            row,
            values: HashMap::new(),
        }
    }

    /// 列の値を登録
    pub fn insert(&mut self, column: String, value: String) {
        self.values.insert(column, value);
    }

    /// 列の値を取得（存在しない場合は`None`）
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// すべての列が存在しない行かどうかを判定
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 読み込んだシート全体のデータ
///
/// ヘッダー行から得た列名の集合と、データ行のレコード列を保持します。
/// 列名の集合は「この列がデータセットに存在するか」の判定
/// （LinkedIn列の有無など）に使用されます。
#[derive(Debug, Clone, Default)]
pub(crate) struct Dataset {
    /// ヘッダー行の列名（シート上の出現順）
    pub columns: Vec<String>,

    /// データ行のレコード（シート上の出現順）
    pub records: Vec<RawRecord>,
}

impl Dataset {
    /// 指定された列名がデータセットに存在するかを判定
    ///
    /// 大文字・小文字を区別した完全一致で照合します。
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}
