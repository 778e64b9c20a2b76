//! Output Module
//!
//! `Contact`モデルをvCard 3.0テキストへシリアライズするモジュール。
//! プロパティの対応は固定のマッピングテーブルとして明示的に走査します。

use std::io::Write;

use crate::error::XlsxToVcfError;
use crate::model::Contact;

/// vCard 3.0フォーマッター
///
/// 出力されるプロパティは以下の固定順です。オプションのプロパティは
/// 対応するフィールドが存在する場合のみ、ちょうど1回出力されます。
///
/// | プロパティ | 条件 |
/// |-----------|------|
/// | `N` / `FN` | 常に出力 |
/// | `EMAIL;TYPE=INTERNET` | `email`が存在する場合 |
/// | `TEL;TYPE=CELL` | `mobile_phone`が存在する場合 |
/// | `TITLE` | `title`が存在する場合 |
/// | `URL` | `company_website`が存在する場合 |
/// | `ORG` | `company`が存在する場合（単一要素の組織リスト） |
/// | `ADR` | `company_address`が存在する場合（通りの成分のみ） |
/// | `X-SOCIALPROFILE;TYPE=linkedin` | `linkedin_url`が存在する場合 |
pub(crate) struct VcardFormatter;

impl VcardFormatter {
    /// 連絡先1件をvCard 3.0テキストとして出力
    ///
    /// # 引数
    ///
    /// * `contact` - 出力する連絡先
    /// * `writer` - 出力先のライター
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 出力に成功した場合
    /// * `Err(XlsxToVcfError::Io)` - 書き込みに失敗した場合
    pub fn render<W: Write>(
        &self,
        contact: &Contact,
        writer: &mut W,
    ) -> Result<(), XlsxToVcfError> {
        write!(writer, "BEGIN:VCARD\r\n")?;
        write!(writer, "VERSION:3.0\r\n")?;

        // 構造化名: family;given（残り3成分は未使用）
        write!(
            writer,
            "N:{};{};;;\r\n",
            escape_text(&contact.family_name),
            escape_text(&contact.given_name)
        )?;
        write!(writer, "FN:{}\r\n", escape_text(&contact.display_name()))?;

        // 固定マッピングテーブル: (プロパティ名, TYPEパラメータ, 値)
        let simple_properties = [
            ("EMAIL", Some("INTERNET"), contact.email.as_deref()),
            ("TEL", Some("CELL"), contact.mobile_phone.as_deref()),
            ("TITLE", None, contact.title.as_deref()),
            ("URL", None, contact.company_website.as_deref()),
            ("ORG", None, contact.company.as_deref()),
        ];
        for (name, type_param, value) in simple_properties {
            if let Some(value) = value {
                write_property(writer, name, type_param, value)?;
            }
        }

        // 住所は7成分のうち通り（3番目）だけを埋める
        if let Some(street) = contact.company_address.as_deref() {
            write!(writer, "ADR:;;{};;;;\r\n", escape_text(street))?;
        }

        if let Some(url) = contact.linkedin_url.as_deref() {
            write_property(writer, "X-SOCIALPROFILE", Some("linkedin"), url)?;
        }

        write!(writer, "END:VCARD\r\n")?;
        Ok(())
    }

    /// 連絡先1件をvCard 3.0テキストの文字列として取得
    pub fn render_to_string(&self, contact: &Contact) -> Result<String, XlsxToVcfError> {
        let mut buffer = Vec::new();
        self.render(contact, &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| {
            XlsxToVcfError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

/// プロパティ1行を出力
fn write_property<W: Write>(
    writer: &mut W,
    name: &str,
    type_param: Option<&str>,
    value: &str,
) -> Result<(), XlsxToVcfError> {
    match type_param {
        Some(type_param) => {
            write!(writer, "{};TYPE={}:{}\r\n", name, type_param, escape_text(value))?
        }
        None => write!(writer, "{}:{}\r\n", name, escape_text(value))?,
    }
    Ok(())
}

/// vCardのテキスト値をエスケープ
///
/// バックスラッシュ、セミコロン、カンマ、改行をエスケープします。
/// CRは出力から除去されます。
fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}
