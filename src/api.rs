//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// シート選択方式
///
/// 変換対象のシートを選択する方法を指定します。
/// ワークブック全体ではなく、常に1枚のシートだけが変換対象になります。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// 先頭のシートを変換（デフォルト）
    ///
    /// 多くの表計算ツールのエクスポートは先頭シートに連絡先一覧を
    /// 置くため、これが既定の動作です。
    First,

    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(1)` は2番目のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Contacts".to_string())`
    Name(String),
}

/// 必須の名前フィールドが空の行に対するポリシー
///
/// `First Name`または`Last Name`が空の行を検出した際の動作を指定します。
/// どちらのポリシーでも、対象行以外の処理内容は変わりません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MissingNamePolicy {
    /// 対象行をスキップし、`ConversionReport::skipped`へ記録する（デフォルト）
    ///
    /// バッチ全体は継続し、スキップした行番号と理由がレポートに残ります。
    Skip,

    /// バッチ全体を中断し、`XlsxToVcfError::MissingRequiredField`を返す
    ///
    /// 最初に検出した不正行でエラーになります。出力ディレクトリへの
    /// 書き込みはマッピング完了後に行われるため、中断時にファイルは
    /// 1つも書き出されません。
    Abort,
}
