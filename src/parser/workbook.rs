//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックレベルの操作を提供します。
//! シート選択と、ヘッダー行＋データ行から`Dataset`への変換を担当します。

use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets, Xlsx};
use chrono::{Duration, NaiveDate};
use std::io::{Read, Seek};

use crate::api::SheetSelector;
use crate::error::XlsxToVcfError;
use crate::types::{Dataset, RawRecord};

/// ワークブックパーサー
pub(crate) struct WorkbookParser<R: Read + Seek> {
    /// calamineのワークブック（XLSX形式のみサポート）
    workbook: Xlsx<R>,
}

impl<R: Read + Seek> WorkbookParser<R> {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合（XLSX形式のみサポート）
    /// * `Err(XlsxToVcfError::Parse)` - ワークブックの読み込みに失敗した場合
    /// * `Err(XlsxToVcfError::Config)` - XLSX形式でない場合
    pub fn open(reader: R) -> Result<Self, XlsxToVcfError> {
        let sheets = open_workbook_auto_from_rs(reader).map_err(XlsxToVcfError::Parse)?;
        match sheets {
            Sheets::Xlsx(workbook) => Ok(Self { workbook }),
            _ => Err(XlsxToVcfError::Config(
                "Only XLSX format is supported".to_string(),
            )),
        }
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシートを1枚選択
    ///
    /// # 引数
    ///
    /// * `selector` - シート選択方式
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(XlsxToVcfError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, XlsxToVcfError> {
        let all_sheet_names = self.sheet_names();

        match selector {
            SheetSelector::First => all_sheet_names.first().cloned().ok_or_else(|| {
                XlsxToVcfError::Config("Workbook contains no sheets".to_string())
            }),

            SheetSelector::Index(index) => {
                if *index >= all_sheet_names.len() {
                    return Err(XlsxToVcfError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    )));
                }
                Ok(all_sheet_names[*index].clone())
            }

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(XlsxToVcfError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// シートを読み取り、`Dataset`へ変換
    ///
    /// 先頭行をヘッダーとして列名を取得し、以降の各行を`RawRecord`へ
    /// 変換します。値が存在しないセルはレコードにエントリを持ちません。
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み取るシート名
    ///
    /// # 戻り値
    ///
    /// * `Ok(Dataset)` - 列名とレコードのペア（シートが空の場合はどちらも空）
    /// * `Err(XlsxToVcfError)` - パースエラーが発生した場合
    pub fn read_dataset(&mut self, sheet_name: &str) -> Result<Dataset, XlsxToVcfError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| XlsxToVcfError::Parse(e.into()))?;

        let mut rows = range.rows();

        // ヘッダー行: 値を持つセルだけを列として採用する
        let columns: Vec<(usize, String)> = match rows.next() {
            Some(header) => header
                .iter()
                .enumerate()
                .filter_map(|(idx, cell)| cell_to_text(cell).map(|name| (idx, name)))
                .collect(),
            None => return Ok(Dataset::default()),
        };

        // データ行: 行番号はヘッダー行を除く1始まり
        let mut records = Vec::new();
        for (row_idx, row) in rows.enumerate() {
            let mut record = RawRecord::new(row_idx as u32 + 1);
            for (col_idx, column) in &columns {
                if let Some(cell) = row.get(*col_idx) {
                    if let Some(value) = cell_to_text(cell) {
                        record.insert(column.clone(), value);
                    }
                }
            }
            records.push(record);
        }

        Ok(Dataset {
            columns: columns.into_iter().map(|(_, name)| name).collect(),
            records,
        })
    }
}

/// セル値をテキストへ変換
///
/// 値が存在しない扱いになるのは、空セル、空文字列、エラーセル
/// （`#DIV/0!`など）、および変換不能な日付シリアル値です。
/// 数値・論理値・日付は文字列表現へ変換されます。
fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_number(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => format_serial_date(dt.as_f64()),
        Data::DateTimeIso(s) => Some(s.clone()),
        Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) => None,
    }
}

/// 数値をテキストへ変換
///
/// 整数値の数値セル（電話番号が数値として入力されている場合など）に
/// `.0`が付かないよう、整数表現できる値は整数として出力します。
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Excelのシリアル日付値をISO 8601（YYYY-MM-DD）のテキストへ変換
///
/// 1900年エポックシステム（1899年12月30日起算）として処理します。
/// 時刻成分（小数部）は切り捨てます。計算がオーバーフローする
/// シリアル値は変換不能として`None`を返します。
fn format_serial_date(serial_value: f64) -> Option<String> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let days = serial_value.floor() as i64;
    let date = epoch.checked_add_signed(Duration::days(days))?;
    Some(date.format("%Y-%m-%d").to_string())
}
