//! Emitter Module
//!
//! 連絡先ごとにファイル名を導出し、vCardファイルを出力ディレクトリへ
//! 書き出すモジュール。ディレクトリは書き込み前に作成されます（冪等）。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::XlsxToVcfError;
use crate::model::Contact;
use crate::output::VcardFormatter;

/// トルコ語のダイアクリティカルマーク付き文字からASCII文字への置換表
///
/// 表にない文字は変換せずそのまま通します。
const TRANSLITERATIONS: [(char, char); 12] = [
    ('ı', 'i'),
    ('ö', 'o'),
    ('ü', 'u'),
    ('ğ', 'g'),
    ('ç', 'c'),
    ('ş', 's'),
    ('İ', 'I'),
    ('Ö', 'O'),
    ('Ü', 'U'),
    ('Ğ', 'G'),
    ('Ç', 'C'),
    ('Ş', 'S'),
];

/// 文字列を1文字ずつ置換表に通す
pub(crate) fn transliterate(input: &str) -> String {
    input
        .chars()
        .map(|ch| {
            TRANSLITERATIONS
                .iter()
                .find(|(from, _)| *from == ch)
                .map(|(_, to)| *to)
                .unwrap_or(ch)
        })
        .collect()
}

/// 連絡先からファイル名を導出
///
/// 名と姓をそれぞれ置換表に通したうえで
/// `"{given}-{family}.vcf"`として結合し、全体を小文字化します。
pub(crate) fn vcf_file_name(contact: &Contact) -> String {
    format!(
        "{}-{}.vcf",
        transliterate(&contact.given_name),
        transliterate(&contact.family_name)
    )
    .to_lowercase()
}

/// 連絡先のリストを1件ずつvCardファイルとして書き出す
///
/// # 引数
///
/// * `contacts` - 書き出す連絡先のリスト
/// * `output_dir` - 出力ディレクトリ（存在しない場合は作成される）
///
/// # 戻り値
///
/// * `Ok(Vec<PathBuf>)` - 書き込んだパスのリスト（連絡先1件につき1エントリ）
/// * `Err(XlsxToVcfError::Io)` - ディレクトリ作成または書き込みに失敗した場合
///
/// # 挙動
///
/// * 同名のファイルが既に存在する場合は黙って上書きします。
///   2件の連絡先が同じファイル名に変換される場合、後の書き込みが
///   先の書き込みを上書きします（ファイル名衝突はエラーではない）。
/// * 失敗時の再試行は行わず、エラーをそのまま伝播します。
pub(crate) fn emit(
    contacts: &[Contact],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, XlsxToVcfError> {
    fs::create_dir_all(output_dir)?;

    let formatter = VcardFormatter;
    let mut written = Vec::with_capacity(contacts.len());

    for contact in contacts {
        let path = output_dir.join(vcf_file_name(contact));
        let mut buffer = Vec::new();
        formatter.render(contact, &mut buffer)?;
        fs::write(&path, &buffer)?;
        written.push(path);
    }

    Ok(written)
}
