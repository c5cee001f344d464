//! 계산 결과를 엑셀(xlsx) 파일로 내보낸다.
//! 항목별 셀 위치는 `ExportTemplate`이 정하며, 값은 단위 변환 없이 그대로 기록한다.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;
use tracing::info;

use crate::calculation::{CalculationInput, CalculationResult};
use crate::field::Field;

/// 내보내기 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("잘못된 셀 위치: {0}")]
    InvalidCell(String),
    #[error("내보낼 값 '{0}'이(가) 없습니다")]
    MissingField(&'static str),
    #[error("파일 이름이 비어 있습니다")]
    EmptyFileName,
    #[error("엑셀 파일 작성 오류: {0}")]
    Xlsx(#[from] XlsxError),
}

/// 항목 → 셀 위치(A1 표기) 목록.
#[derive(Debug, Clone)]
pub struct ExportTemplate {
    cells: Vec<(Field, &'static str)>,
}

impl ExportTemplate {
    pub fn new(cells: Vec<(Field, &'static str)>) -> Self {
        Self { cells }
    }

    /// 일괄 계산용 기본 템플릿. 입력은 C열, 결과는 H열에 배치한다.
    pub fn aggregate() -> Self {
        Self::new(vec![
            (Field::ClMax, "C4"),
            (Field::Cd, "C5"),
            (Field::Mass, "C7"),
            (Field::VelocityMin, "C8"),
            (Field::Capacity, "C10"),
            (Field::CapacityUsed, "C11"),
            (Field::CruiseCurrentDraw, "C12"),
            (Field::BatteryVoltage, "C13"),
            (Field::WattageP, "C14"),
            (Field::TrueAirspeed, "C16"),
            (Field::WindSpeed, "C17"),
            (Field::WindOrigin, "C18"),
            (Field::Course, "C19"),
            (Field::WingArea, "H5"),
            (Field::StallSpeed, "H7"),
            (Field::Thrust, "H9"),
            (Field::FlightTime, "H11"),
            (Field::AircraftRange, "H13"),
            (Field::GroundSpeed, "H16"),
        ])
    }

    pub fn cells(&self) -> &[(Field, &'static str)] {
        &self.cells
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.cells.iter().map(|(f, _)| *f)
    }
}

/// 입력 맵과 결과 맵을 하나의 값 목록으로 합친다. 알 수 없는 키는 무시한다.
pub fn collect_values(
    input: &CalculationInput,
    result: &CalculationResult,
) -> BTreeMap<Field, f64> {
    let mut values: BTreeMap<Field, f64> = input
        .iter()
        .filter_map(|(k, v)| Field::from_key(k).map(|f| (f, v)))
        .collect();
    values.extend(result.iter());
    values
}

/// 저장 경로를 만든다. 디렉터리가 비어 있으면 현재 디렉터리를 사용한다.
pub fn export_path(dir: &str, name: &str) -> Result<PathBuf, ExportError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ExportError::EmptyFileName);
    }
    let dir = dir.trim();
    let base = if dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(dir)
    };
    Ok(base.join(format!("{name}.xlsx")))
}

/// A1 표기 셀 위치를 0 기반 (행, 열)로 변환한다.
pub fn parse_cell(cell: &str) -> Result<(u32, u16), ExportError> {
    let invalid = || ExportError::InvalidCell(cell.to_string());
    let split = cell
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (letters, digits) = cell.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    let mut col: u32 = 0;
    for c in letters.chars() {
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        if col > 16_384 {
            return Err(invalid());
        }
    }
    let row: u32 = digits.parse().map_err(|_| invalid())?;
    if row == 0 || row > 1_048_576 {
        return Err(invalid());
    }
    Ok((row - 1, (col - 1) as u16))
}

/// 템플릿 위치에 값을 기록해 xlsx로 저장한다.
///
/// 값 셀 왼쪽에는 `label`이 돌려준 이름을, 오른쪽에는 단위를 쓴다.
/// 템플릿의 모든 항목이 `values`에 있어야 한다.
pub fn export_values<F>(
    template: &ExportTemplate,
    values: &BTreeMap<Field, f64>,
    label: F,
    path: &Path,
) -> Result<(), ExportError>
where
    F: Fn(Field) -> String,
{
    let mut placed = Vec::with_capacity(template.cells().len());
    for (field, cell) in template.cells() {
        let value = values
            .get(field)
            .copied()
            .ok_or(ExportError::MissingField(field.key()))?;
        let (row, col) = parse_cell(cell)?;
        placed.push((*field, row, col, value));
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("PlaneAssist")?;
    worksheet.write_string_with_format(0, 0, "PlaneAssist", &bold)?;

    for (field, row, col, value) in placed {
        if col > 0 {
            worksheet.write_string(row, col - 1, &label(field))?;
            worksheet.set_column_width(col - 1, 32.0)?;
        }
        worksheet.write_number(row, col, value)?;
        let unit = field.unit();
        if !unit.is_empty() {
            worksheet.write_string(row, col + 1, unit)?;
        }
    }

    workbook.save(path)?;
    info!(path = %path.display(), "xlsx 내보내기 완료");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_multi_letter() {
        assert_eq!(parse_cell("A1").unwrap(), (0, 0));
        assert_eq!(parse_cell("H16").unwrap(), (15, 7));
        assert_eq!(parse_cell("AA10").unwrap(), (9, 26));
        assert_eq!(parse_cell("c4").unwrap(), (3, 2));
    }

    #[test]
    fn parse_cell_rejects_garbage() {
        for bad in ["", "4C", "C", "C0", "C-1", "Ä1", "C4X"] {
            assert!(parse_cell(bad).is_err(), "{bad} should be rejected");
        }
    }
}
