//! Contact Model Module
//!
//! 正規化済みの連絡先モデルを定義するモジュール。

use serde::Serialize;

/// 正規化済みの連絡先
///
/// 入力レコード1行から生成される不変のモデルです。名前の2フィールドは
/// 常に存在し、その他のフィールドは入力セルに値が存在した場合のみ
/// `Some`になります（空文字列が入ることはありません）。
///
/// 表示名は`given_name`と`family_name`から常に導出され、
/// 独立したフィールドとしては保持しません。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// 名
    pub given_name: String,

    /// 姓
    pub family_name: String,

    /// メールアドレス
    pub email: Option<String>,

    /// 携帯電話番号
    pub mobile_phone: Option<String>,

    /// 役職
    pub title: Option<String>,

    /// 会社のWebサイトURL
    pub company_website: Option<String>,

    /// 会社名
    pub company: Option<String>,

    /// 会社住所（通りの行のみ、市区町村などへの分解は行わない）
    pub company_address: Option<String>,

    /// LinkedInプロフィールURL（正規化済み、常に`http`で始まる）
    pub linkedin_url: Option<String>,
}

impl Contact {
    /// 名前だけを持つ連絡先を生成（オプションフィールドはすべて`None`）
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            email: None,
            mobile_phone: None,
            title: None,
            company_website: None,
            company: None,
            company_address: None,
            linkedin_url: None,
        }
    }

    /// 表示名を導出（`"{given_name} {family_name}"`）
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}
