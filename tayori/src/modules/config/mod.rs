// Config Module - 配置模块
//
// 后端端点配置：基础路径在构造时注入，运行期不可变，
// 因此本模块只有领域层，没有持久化端口

pub mod domain;

pub use domain::{BackendKind, BackendProfile, BasePath};
