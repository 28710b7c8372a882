use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::User;

/// Fixed key for the single durable session slot
pub const SESSION_KEY: &str = "investpro_user";

/// Durable storage for the session slot.
///
/// One key, one serialized `User`: read once at cold start, written on
/// login/signup, deleted on logout. No versioning, no expiry, no signature
/// check (acknowledged as insecure; this is a demo).
pub trait SessionBackend: Send + Sync {
    /// Read the stored user, if any. Corrupt slot contents are treated as
    /// no session, not as a hard failure.
    fn load(&self) -> Result<Option<User>>;

    /// Overwrite the slot with this user
    fn store(&mut self, user: &User) -> Result<()>;

    /// Delete the slot
    fn clear(&mut self) -> Result<()>;
}

/// File-backed session slot: `investpro_user.json` under a caller-supplied
/// directory, the local-storage slot's stand-in.
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SESSION_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionBackend for FileSession {
    fn load(&self) -> Result<Option<User>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                eprintln!("Warning: Ignoring corrupt session slot: {e}");
                Ok(None)
            }
        }
    }

    fn store(&mut self, user: &User) -> Result<()> {
        fs::write(&self.path, serde_json::to_string(user)?)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session slot for tests and the demo driver
#[derive(Default)]
pub struct MemorySession {
    user: Option<User>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemorySession {
    fn load(&self) -> Result<Option<User>> {
        Ok(self.user.clone())
    }

    fn store(&mut self, user: &User) -> Result<()> {
        self.user = Some(user.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.user = None;
        Ok(())
    }
}

/// Session store: the current authenticated user plus its durable slot.
///
/// Login always succeeds; the user record is fabricated client-side and the
/// password is never checked.
pub struct SessionStore<S: SessionBackend> {
    backend: S,
    current: Option<User>,
}

impl<S: SessionBackend> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Fabricate a user from the email's local part, persist it, and
    /// establish the session
    pub fn login(&mut self, email: &str, _password: &str) -> Result<&User> {
        let user = User::from_email(email);
        self.backend.store(&user)?;
        Ok(self.current.insert(user))
    }

    /// Same fabrication contract as login, with the supplied name and phone
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
        phone: Option<String>,
    ) -> Result<&User> {
        let user = User::new(name, email, phone);
        self.backend.store(&user)?;
        Ok(self.current.insert(user))
    }

    /// Clear the session and the durable slot
    pub fn logout(&mut self) -> Result<()> {
        self.backend.clear()?;
        self.current = None;
        Ok(())
    }

    /// Cold-start restore from the durable slot
    pub fn restore(&mut self) -> Result<Option<&User>> {
        self.current = self.backend.load()?;
        Ok(self.current.as_ref())
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref()
    }
}
