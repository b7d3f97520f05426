pub mod admin_repo;
pub mod city_repo;
pub mod dropshipper_repo;
pub mod identity_repo;
pub mod order_repo;
pub mod permission_repo;
pub mod product_repo;
pub mod soft_delete;
pub mod staff_repo;
pub mod state_repo;
pub mod supplier_repo;
pub mod warehouse_repo;

pub use admin_repo::AdminRepo;
pub use city_repo::CityRepo;
pub use dropshipper_repo::DropshipperRepo;
pub use identity_repo::IdentityRepo;
pub use order_repo::OrderRepo;
pub use permission_repo::PermissionRepo;
pub use product_repo::ProductRepo;
pub use soft_delete::Deleter;
pub use staff_repo::StaffRepo;
pub use state_repo::StateRepo;
pub use supplier_repo::SupplierRepo;
pub use warehouse_repo::WarehouseRepo;
