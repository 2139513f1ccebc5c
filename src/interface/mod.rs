//! Interface layer
//! CLI 입력 파싱과 실행 조립(composition)을 담당한다.

pub mod cli;
pub mod composition;
