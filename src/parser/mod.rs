//! Parser Module
//!
//! calamineを使用したExcelファイル解析の基礎実装。
//! ヘッダー行とデータ行を読み取り、行ごとの生レコードへ変換します。

mod workbook;

pub(crate) use workbook::WorkbookParser;
