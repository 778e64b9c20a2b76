//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use serde::Serialize;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use crate::api::{MissingNamePolicy, SheetSelector};
use crate::emitter;
use crate::error::XlsxToVcfError;
use crate::mapper;
use crate::model::Contact;
use crate::output::VcardFormatter;
use crate::parser::WorkbookParser;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 必須の名前フィールドが空の行に対するポリシー
    pub missing_name_policy: MissingNamePolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::First,
            missing_name_policy: MissingNamePolicy::Skip,
        }
    }
}

/// スキップされた行の記録
///
/// `MissingNamePolicy::Skip`の場合に、必須の名前フィールドが空だった
/// 行の行番号と理由を保持します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// データ行番号（ヘッダー行を除く1始まり）
    pub row: u32,

    /// スキップした理由
    pub reason: String,
}

/// 変換結果のレポート
///
/// `Converter::convert`の戻り値です。書き込んだパスは連絡先1件につき
/// 1エントリ記録されるため、ファイル名が衝突した場合は同じパスが
/// 複数回現れます（ディスク上のファイル数はエントリ数より少なくなる）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// 書き込んだvCardファイルのパス（連絡先の出現順）
    pub written: Vec<PathBuf>,

    /// スキップした行の記録
    pub skipped: Vec<SkippedRecord>,
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxvcard::{ConverterBuilder, MissingNamePolicy, SheetSelector};
///
/// # fn main() -> Result<(), xlsxvcard::XlsxToVcfError> {
/// let converter = ConverterBuilder::new()
///     .with_sheet_selector(SheetSelector::Index(0))
///     .with_missing_name_policy(MissingNamePolicy::Abort)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 先頭のシート
    /// - 名前フィールドが空の行: スキップしてレポートへ記録
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// 変換対象のシートを選択する
    ///
    /// # 引数
    ///
    /// * `selector: SheetSelector`: シート選択方式
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxvcard::{ConverterBuilder, SheetSelector};
    ///
    /// // シートを名前で指定
    /// let builder = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name("Contacts".to_string()));
    ///
    /// // シートをインデックスで指定
    /// let builder = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(1));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 必須の名前フィールドが空の行に対するポリシーを指定する
    ///
    /// # 引数
    ///
    /// * `policy: MissingNamePolicy`: 適用するポリシー
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsxvcard::{ConverterBuilder, MissingNamePolicy};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_missing_name_policy(MissingNamePolicy::Abort);
    /// ```
    pub fn with_missing_name_policy(mut self, policy: MissingNamePolicy) -> Self {
        self.config.missing_name_policy = policy;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Converter)`: 設定が有効な場合、Converterインスタンス
    /// * `Err(XlsxToVcfError::Config)`: 設定が無効な場合（例: 空のシート名）
    pub fn build(self) -> Result<Converter, XlsxToVcfError> {
        // シート名の検証
        if let SheetSelector::Name(ref name) = self.config.sheet_selector {
            if name.is_empty() {
                return Err(XlsxToVcfError::Config(
                    "Sheet name must not be empty".to_string(),
                ));
            }
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// Excelの連絡先一覧をvCardファイル群へ変換するためのメイン
/// エントリーポイントです。`ConverterBuilder`を使用して構築された
/// 設定に基づいて変換処理を実行します。
///
/// # 使用例
///
/// ```rust,no_run
/// use std::fs::File;
/// use std::path::Path;
/// use xlsxvcard::ConverterBuilder;
///
/// # fn main() -> Result<(), xlsxvcard::XlsxToVcfError> {
/// let converter = ConverterBuilder::new().build()?;
/// let input = File::open("contacts.xlsx")?;
/// let report = converter.convert(input, Path::new("vcards"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Excelの連絡先一覧を読み取り、vCardファイル群として書き出す
    ///
    /// # 引数
    ///
    /// * `input` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    /// * `output_dir` - 出力ディレクトリ（存在しない場合は作成される）
    ///
    /// # 戻り値
    ///
    /// * `Ok(ConversionReport)` - 書き込んだパスとスキップした行の記録
    /// * `Err(XlsxToVcfError)` - エラーが発生した場合
    ///
    /// # 処理フロー
    ///
    /// 1. ワークブックを開き、シートを1枚選択
    /// 2. ヘッダー行とデータ行を`Dataset`として読み込む
    /// 3. 各レコードを`Contact`へマッピング（ポリシーに応じてスキップ/中断）
    /// 4. 出力ディレクトリを作成し、連絡先ごとにvCardファイルを書き出す
    ///
    /// 入力全体のマッピングが完了してからファイルの書き出しを開始します。
    /// 逐次処理であり、並行書き込みは行いません。
    pub fn convert<R: Read + Seek, P: AsRef<Path>>(
        &self,
        input: R,
        output_dir: P,
    ) -> Result<ConversionReport, XlsxToVcfError> {
        let (contacts, skipped) = self.contacts(input)?;
        let written = emitter::emit(&contacts, output_dir.as_ref())?;

        Ok(ConversionReport { written, skipped })
    }

    /// Excelの連絡先一覧を`Contact`モデルへマッピングする
    ///
    /// ファイルシステムへの副作用はありません。
    ///
    /// # 引数
    ///
    /// * `input` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok((contacts, skipped))` - 変換された連絡先と、スキップした行の記録
    /// * `Err(XlsxToVcfError)` - エラーが発生した場合
    pub fn contacts<R: Read + Seek>(
        &self,
        input: R,
    ) -> Result<(Vec<Contact>, Vec<SkippedRecord>), XlsxToVcfError> {
        let mut parser = WorkbookParser::open(input)?;
        let sheet_name = parser.select_sheet(&self.config.sheet_selector)?;
        let dataset = parser.read_dataset(&sheet_name)?;

        mapper::map_dataset(&dataset, self.config.missing_name_policy)
    }

    /// Excelの連絡先一覧を(ファイル名, vCardテキスト)のペアへ変換する
    ///
    /// ファイルシステムへの副作用なしに、書き出される内容を取得できます。
    /// スキップされた行の情報が必要な場合は`contacts`を使用してください。
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use std::fs::File;
    /// use xlsxvcard::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsxvcard::XlsxToVcfError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let input = File::open("contacts.xlsx")?;
    /// for (file_name, vcard) in converter.convert_to_strings(input)? {
    ///     println!("--- {}\n{}", file_name, vcard);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_to_strings<R: Read + Seek>(
        &self,
        input: R,
    ) -> Result<Vec<(String, String)>, XlsxToVcfError> {
        let (contacts, _skipped) = self.contacts(input)?;
        let formatter = VcardFormatter;

        contacts
            .iter()
            .map(|contact| {
                Ok((
                    emitter::vcf_file_name(contact),
                    formatter.render_to_string(contact)?,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_builder_new() {
        let builder = ConverterBuilder::new();
        assert_eq!(builder.config.sheet_selector, SheetSelector::First);
        assert_eq!(
            builder.config.missing_name_policy,
            MissingNamePolicy::Skip
        );
    }

    #[test]
    fn test_with_sheet_selector() {
        let builder = ConverterBuilder::new().with_sheet_selector(SheetSelector::Index(2));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Index(2)
        ));

        let builder = ConverterBuilder::new()
            .with_sheet_selector(SheetSelector::Name("Contacts".to_string()));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Name(ref name) if name == "Contacts"
        ));
    }

    #[test]
    fn test_with_missing_name_policy() {
        let builder =
            ConverterBuilder::new().with_missing_name_policy(MissingNamePolicy::Abort);
        assert_eq!(
            builder.config.missing_name_policy,
            MissingNamePolicy::Abort
        );
    }

    #[test]
    fn test_build_success() {
        let result = ConverterBuilder::new().build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_empty_sheet_name() {
        let result = ConverterBuilder::new()
            .with_sheet_selector(SheetSelector::Name(String::new()))
            .build();
        match result {
            Err(XlsxToVcfError::Config(msg)) => {
                assert!(msg.contains("Sheet name"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = ConverterBuilder::new()
            .with_sheet_selector(SheetSelector::Name("Contacts".to_string()))
            .with_missing_name_policy(MissingNamePolicy::Abort);

        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Name(ref name) if name == "Contacts"
        ));
        assert_eq!(
            builder.config.missing_name_policy,
            MissingNamePolicy::Abort
        );
    }

    #[test]
    fn test_converter_contacts_with_invalid_input() {
        let converter = ConverterBuilder::new().build().unwrap();
        // 無効な入力データ（空のVec）
        let invalid_input: Vec<u8> = vec![];
        let result = converter.contacts(std::io::Cursor::new(invalid_input));
        assert!(result.is_err());
    }
}
