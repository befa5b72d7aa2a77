/*!
Core modules for the stream record logger
*/

pub mod context;
pub mod dispatcher;
pub mod sink;
