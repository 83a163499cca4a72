use std::fmt;

/// 活动日志事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent<'a> {
    Login {
        login_id: &'a str,
        ip: &'a str,
        location: &'a str,
    },
    Visit {
        login_id: &'a str,
        ip: &'a str,
        location: &'a str,
    },
    Logout {
        login_id: &'a str,
        ip: &'a str,
        location: &'a str,
    },
    LookupFailed {
        ip: &'a str,
        reason: &'a str,
    },
}

impl ActivityEvent<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            ActivityEvent::Login { .. } => "LOGIN",
            ActivityEvent::Visit { .. } => "ACTIVITY",
            ActivityEvent::Logout { .. } => "LOGOUT",
            ActivityEvent::LookupFailed { .. } => "ERROR",
        }
    }
}

/// 转义控制字符，保证一条事件只占一行
struct Field<'a>(&'a str);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            if c.is_control() {
                write!(f, "{}", c.escape_default())?;
            } else {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ActivityEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ActivityEvent::Login {
                login_id,
                ip,
                location,
            } => write!(
                f,
                "LOGIN - ID: {} | IP: {} | Location: {}",
                Field(login_id),
                Field(ip),
                Field(location)
            ),
            ActivityEvent::Visit {
                login_id,
                ip,
                location,
            } => write!(
                f,
                "ACTIVITY - User: {} visited main page | IP: {} | Location: {}",
                Field(login_id),
                Field(ip),
                Field(location)
            ),
            ActivityEvent::Logout {
                login_id,
                ip,
                location,
            } => write!(
                f,
                "LOGOUT - User: {} logged out | IP: {} | Location: {}",
                Field(login_id),
                Field(ip),
                Field(location)
            ),
            ActivityEvent::LookupFailed { ip, reason } => write!(
                f,
                "Error fetching location for IP {}: {}",
                Field(ip),
                Field(reason)
            ),
        }
    }
}
