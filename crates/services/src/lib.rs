//! Use cases: the orchestration layer between the HTTP adapters and the
//! stores. Each use case validates its payload, sequences repository calls
//! and holds no state between invocations, so concurrent calls for
//! different ids are safe.

mod add_comment;
mod add_thread;
mod delete_comment;
mod get_thread_detail;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use get_thread_detail::GetThreadDetailUseCase;
