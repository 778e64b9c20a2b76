//! Record Mapper Module
//!
//! 生レコードを正規化済みの`Contact`モデルへ変換するモジュール。
//! 各オプションフィールドは列ごとに独立して存在判定され、
//! LinkedIn URLのみ正規化処理を伴います。

use crate::api::MissingNamePolicy;
use crate::builder::SkippedRecord;
use crate::error::XlsxToVcfError;
use crate::model::Contact;
use crate::types::{Dataset, RawRecord};

// 入力シートの列名（大文字・小文字を区別した完全一致）
pub(crate) const FIRST_NAME: &str = "First Name";
pub(crate) const LAST_NAME: &str = "Last Name";
pub(crate) const EMAIL: &str = "E-Mail";
pub(crate) const MOBILE_PHONE: &str = "Mobile Phone";
pub(crate) const TITLE: &str = "Title";
pub(crate) const COMPANY_WEBSITE: &str = "Company Website";
pub(crate) const COMPANY: &str = "Company";
pub(crate) const COMPANY_ADDRESS: &str = "Company Address";
pub(crate) const LINKEDIN_PROFILE: &str = "Linkedin Profile";

/// ヘッダーに必須の列
///
/// `Linkedin Profile`列だけは任意で、存在しないデータセットも有効です。
pub(crate) const MANDATORY_COLUMNS: [&str; 8] = [
    FIRST_NAME,
    LAST_NAME,
    EMAIL,
    MOBILE_PHONE,
    TITLE,
    COMPANY_WEBSITE,
    COMPANY,
    COMPANY_ADDRESS,
];

/// データセット全体を`Contact`のリストへ変換
///
/// # 引数
///
/// * `dataset` - 読み込んだシートのデータ
/// * `policy` - 必須の名前フィールドが空の行に対するポリシー
///
/// # 戻り値
///
/// * `Ok((contacts, skipped))` - 変換された連絡先と、スキップした行の記録
/// * `Err(XlsxToVcfError::MissingColumn)` - データ行が存在するのに必須列がない場合
/// * `Err(XlsxToVcfError::MissingRequiredField)` - `Abort`ポリシーで不正行を検出した場合
///
/// # 挙動
///
/// * データ行が1行もないシートは、列の検証を行わず空の結果を返します。
/// * すべてのセルが空の行（末尾の余白行など）は黙って無視されます。
pub(crate) fn map_dataset(
    dataset: &Dataset,
    policy: MissingNamePolicy,
) -> Result<(Vec<Contact>, Vec<SkippedRecord>), XlsxToVcfError> {
    if dataset.records.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    for column in MANDATORY_COLUMNS {
        if !dataset.has_column(column) {
            return Err(XlsxToVcfError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut contacts = Vec::with_capacity(dataset.records.len());
    let mut skipped = Vec::new();

    for record in &dataset.records {
        if record.is_empty() {
            continue;
        }

        match map_record(record, &dataset.columns) {
            Ok(contact) => contacts.push(contact),
            Err(error @ XlsxToVcfError::MissingRequiredField { .. }) => match policy {
                MissingNamePolicy::Abort => return Err(error),
                MissingNamePolicy::Skip => skipped.push(SkippedRecord {
                    row: record.row,
                    reason: error.to_string(),
                }),
            },
            Err(error) => return Err(error),
        }
    }

    Ok((contacts, skipped))
}

/// 1レコードを`Contact`へ変換
///
/// # 引数
///
/// * `record` - 変換対象の生レコード
/// * `known_columns` - データセット全体に存在する列名の集合
///
/// オプションフィールドは値が存在する場合のみ設定されます。
/// LinkedIn URLだけは、`Linkedin Profile`列がデータセットに存在し、
/// かつこの行の値が存在する場合に限り、正規化のうえ設定されます。
pub(crate) fn map_record(
    record: &RawRecord,
    known_columns: &[String],
) -> Result<Contact, XlsxToVcfError> {
    let given_name = required_field(record, FIRST_NAME)?;
    let family_name = required_field(record, LAST_NAME)?;

    let linkedin_url = if known_columns.iter().any(|c| c == LINKEDIN_PROFILE) {
        record.get(LINKEDIN_PROFILE).map(normalize_linkedin_url)
    } else {
        None
    };

    Ok(Contact {
        given_name,
        family_name,
        email: optional_field(record, EMAIL),
        mobile_phone: optional_field(record, MOBILE_PHONE),
        title: optional_field(record, TITLE),
        company_website: optional_field(record, COMPANY_WEBSITE),
        company: optional_field(record, COMPANY),
        company_address: optional_field(record, COMPANY_ADDRESS),
        linkedin_url,
    })
}

/// 必須フィールドの値を取得（存在しない場合はエラー）
fn required_field(record: &RawRecord, column: &str) -> Result<String, XlsxToVcfError> {
    record
        .get(column)
        .map(str::to_string)
        .ok_or_else(|| XlsxToVcfError::MissingRequiredField {
            row: record.row,
            column: column.to_string(),
        })
}

/// オプションフィールドの値を取得
fn optional_field(record: &RawRecord, column: &str) -> Option<String> {
    record.get(column).map(str::to_string)
}

/// LinkedIn URLを正規化
///
/// 値が`http`で始まらない場合、`https://`を前置します。
/// それ以外の変換は行いません。
pub(crate) fn normalize_linkedin_url(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}
