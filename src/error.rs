//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// xlsxvcardクレート全体で使用するエラー型
///
/// このエラー型は、Excelファイルの読み込み、レコードのマッピング、
/// vCardファイルの書き出し処理中に発生するすべてのエラーを
/// 統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（出力ディレクトリ作成失敗、書き込み失敗など）
/// - `Parse`: Excelファイルの解析中に発生したエラー（calamine由来）
/// - `Config`: 設定の検証に失敗したエラー（無効なシート指定など）
/// - `MissingColumn`: 必須列がシートのヘッダーに存在しないエラー
/// - `MissingRequiredField`: 必須の名前フィールドが空の行を検出したエラー
///   （`MissingNamePolicy::Abort`の場合のみ発生）
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxvcard::XlsxToVcfError;
/// use std::fs::File;
///
/// fn open_contacts_file(path: &str) -> Result<(), XlsxToVcfError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToVcfError {
    /// I/O操作中に発生したエラー
    ///
    /// 出力ディレクトリの作成失敗、vCardファイルの書き込み失敗など、
    /// 標準ライブラリの`std::io::Error`が発生した場合に使用されます。
    /// 再試行は行わず、そのまま呼び出し元へ伝播します。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excelファイルの解析中に発生したエラー
    ///
    /// calamineクレートがExcelファイルを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイル、サポートされていない形式などが
    /// 原因となります。
    ///
    /// `#[from]`属性により、`calamine::Error`から自動的に変換されます。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時の検証、またはシート選択の解決に
    /// 失敗した場合に発生します。例えば、空のシート名を指定した場合や、
    /// シートインデックスが範囲外の場合などです。
    #[error("Configuration error: {0}")]
    Config(String),

    /// 必須列がヘッダーに存在しないエラー
    ///
    /// データ行が1行以上存在するにもかかわらず、マッピングに必要な列が
    /// シートのヘッダー行に見つからない場合に発生します。
    /// 列名は大文字・小文字を区別した完全一致で照合されます。
    #[error("Missing column '{column}' in input sheet")]
    MissingColumn {
        /// 見つからなかった列名
        column: String,
    },

    /// 必須の名前フィールドが空の行を検出したエラー
    ///
    /// `First Name`または`Last Name`が空の行に対して、
    /// `MissingNamePolicy::Abort`が設定されている場合に発生します。
    /// デフォルトの`Skip`ポリシーでは、このエラーの代わりに
    /// `ConversionReport::skipped`へ記録されます。
    #[error("Row {row}: required field '{column}' is empty")]
    MissingRequiredField {
        /// 対象のデータ行番号（ヘッダー行を除く1始まり）
        row: u32,
        /// 空だった列名
        column: String,
    },
}
