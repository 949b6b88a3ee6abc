//! 출력용 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod length;

pub use energy::{convert_energy, EnergyUnit};
pub use length::{convert_length, LengthUnit};
