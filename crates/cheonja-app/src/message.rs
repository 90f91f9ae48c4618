//! User-facing messages for errors raised by the game crates.

use cheonja_core::{DatasetError, RangeError};
use cheonja_game::{GameError, SessionError};
use cheonja_generator::GenerateError;

pub(crate) const INVALID_RANGE: &str = "유효한 시작 번호와 끝 번호를 입력해주세요. (시작 <= 끝)";

#[must_use]
pub(crate) fn range_error(err: &RangeError) -> String {
    log::debug!("rejected range: {err}");
    INVALID_RANGE.to_owned()
}

#[must_use]
pub(crate) fn dataset_error(err: &DatasetError) -> String {
    format!("천자문 데이터를 읽지 못했습니다: {err}")
}

#[must_use]
pub(crate) fn session_error(err: &SessionError) -> String {
    match err {
        SessionError::Generate(err) => generate_error(err),
        SessionError::Game(GameError::NotRunning) => "게임이 진행 중이 아닙니다.".to_owned(),
        SessionError::Game(GameError::IndexOutOfRange { .. }) => {
            "판에 없는 칸을 선택했습니다.".to_owned()
        }
        SessionError::NoActiveGame => "먼저 게임을 시작해주세요.".to_owned(),
    }
}

fn generate_error(err: &GenerateError) -> String {
    match *err {
        GenerateError::InsufficientPool {
            required,
            available,
        } => format!(
            "선택한 범위의 글자가 부족합니다. {required}자가 필요하지만 {available}자뿐입니다."
        ),
        GenerateError::InsufficientGroups {
            required,
            available,
        } => format!(
            "8글자 묶음이 부족합니다. {required}묶음이 필요하지만 완전한 묶음은 {available}개뿐입니다."
        ),
        GenerateError::DerangementUnsatisfiable { .. } => {
            "이 설정으로는 판을 섞을 수 없습니다. 묶음 수나 단계를 바꿔주세요.".to_owned()
        }
    }
}
