pub fn render_reset_request(reset_link: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Password Reset Request</h2>
    <p>A password reset was requested for your account.</p>
    <p><a href="{reset_link}" style="display: inline-block; padding: 10px 20px; background: #0070f3; color: white; text-decoration: none; border-radius: 4px;">Reset Password</a></p>
    <p style="color: #666; font-size: 14px;">This link expires in 15 minutes. If you didn't request this, you can ignore it.</p>
</body>
</html>"#
    )
}

pub fn render_reset_confirmation() -> String {
    r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Password Reset Successfully</h2>
    <p>Your password has been changed.</p>
    <p style="color: #666; font-size: 14px;">If this wasn't you, contact support immediately.</p>
</body>
</html>"#
        .to_string()
}
