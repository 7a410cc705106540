use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Route path must start with '/': {:?}", path))]
    InvalidRoutePath { path: String },

    #[snafu(display("Route path registered more than once: {}", path))]
    DuplicateRoute { path: String },

    #[snafu(display("Mount target #{} not found in document", id))]
    MountTargetMissing { id: String },

    #[snafu(display("Mount target #{} is not an HTML element", id))]
    MountTargetInvalid { id: String },

    #[snafu(display("Application is already mounted"))]
    AlreadyMounted,

    #[snafu(display("{}", msg))]
    Whatever { msg: String },
}
