//! Domain Layer
//!
//! This is the core of Bootapp - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ProjectInfo, Registry, ContainerInfo, HostsRecord)
//! - `value_objects/` - Immutable value types (Subnet, SubnetPool, CertificatePaths)
//! - `services/` - Domain services (SubnetAllocator, change detection, hosts record formats)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or runs processes directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
