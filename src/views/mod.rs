use minijinja::{Environment, Value, context};

pub const LOGIN_TEMPLATE: &str = "login.html";
pub const MAIN_TEMPLATE: &str = "main.html";

/// 页面渲染，模板在编译期嵌入
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(LOGIN_TEMPLATE, include_str!("../../templates/login.html"))?;
        env.add_template(MAIN_TEMPLATE, include_str!("../../templates/main.html"))?;
        Ok(Self { env })
    }

    /// 按模板名和命名参数渲染，`.html` 模板自动转义
    pub fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }

    pub fn login_page(&self, error: Option<&str>) -> Result<String, minijinja::Error> {
        self.render(LOGIN_TEMPLATE, context! { error => error })
    }

    pub fn main_page(&self, login_id: &str) -> Result<String, minijinja::Error> {
        self.render(MAIN_TEMPLATE, context! { login_id => login_id })
    }
}
