use std::cell::RefCell;
use std::rc::Rc;

use crate::{GameConfig, PongApp};
use js_sys::Float32Array;
use pong_common::{App, Color, Renderer};
use wasm_bindgen::prelude::*;
use web_sys::{
    HtmlCanvasElement, KeyboardEvent, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader,
    WebGlUniformLocation, Window,
};

const VERTEX_SHADER_SOURCE: &str = r#"
attribute vec2 a_position;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER_SOURCE: &str = r#"
precision mediump float;
uniform vec4 u_color;
void main() {
    gl_FragColor = u_color;
}
"#;

/// Draws flat rectangles through a WebGL 1 context.
///
/// Every rectangle gets its own freshly uploaded vertex buffer, which is
/// deleted again once the draw call is issued.
pub struct GlRenderer {
    gl: Gl,
    position_location: u32,
    color_location: Option<WebGlUniformLocation>,
    _program: WebGlProgram,
}

impl GlRenderer {
    pub fn new(gl: Gl) -> Result<Self, String> {
        let vertex = compile_shader(&gl, Gl::VERTEX_SHADER, VERTEX_SHADER_SOURCE)?;
        let fragment = compile_shader(&gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER_SOURCE)?;
        let program = link_program(&gl, &vertex, &fragment)?;
        gl.use_program(Some(&program));

        let position_location = gl.get_attrib_location(&program, "a_position");
        if position_location < 0 {
            return Err("a_position attribute not found".to_string());
        }
        let color_location = gl.get_uniform_location(&program, "u_color");

        Ok(Self {
            gl,
            position_location: position_location as u32,
            color_location,
            _program: program,
        })
    }
}

impl Renderer for GlRenderer {
    fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_f32_array();
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(Gl::COLOR_BUFFER_BIT);
    }

    fn draw_rect(&mut self, x: f32, y: f32, half_width: f32, half_height: f32, color: Color) {
        let (left, right) = (x - half_width, x + half_width);
        let (bottom, top) = (y - half_height, y + half_height);
        let vertices: [f32; 12] = [
            left, bottom, right, bottom, left, top, //
            left, top, right, bottom, right, top,
        ];

        let Some(buffer) = self.gl.create_buffer() else {
            log::warn!("WebGL buffer allocation failed, skipping rect");
            return;
        };
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
        let positions = Float32Array::from(&vertices[..]);
        self.gl
            .buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &positions, Gl::STATIC_DRAW);
        self.gl
            .vertex_attrib_pointer_with_i32(self.position_location, 2, Gl::FLOAT, false, 0, 0);
        self.gl.enable_vertex_attrib_array(self.position_location);

        let [r, g, b, a] = color.to_f32_array();
        self.gl.uniform4f(self.color_location.as_ref(), r, g, b, a);
        self.gl.draw_arrays(Gl::TRIANGLES, 0, 6);
        self.gl.delete_buffer(Some(&buffer));
    }
}

fn compile_shader(gl: &Gl, shader_type: u32, source: &str) -> Result<WebGlShader, String> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or_else(|| "Unable to create shader object".to_string())?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "Unknown error compiling shader".to_string()))
    }
}

fn link_program(gl: &Gl, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, String> {
    let program = gl
        .create_program()
        .ok_or_else(|| "Unable to create program object".to_string())?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "Unknown error linking program".to_string()))
    }
}

#[wasm_bindgen]
pub struct PongWasm {
    app: PongApp,
    renderer: GlRenderer,
}

#[wasm_bindgen]
impl PongWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PongWasm, JsValue> {
        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("window has no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
            .dyn_into::<HtmlCanvasElement>()?;

        let gl = canvas
            .get_context("webgl")?
            .ok_or("WebGL is not supported by this browser")?
            .dyn_into::<Gl>()?;
        gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);

        let renderer = GlRenderer::new(gl).map_err(|err| {
            log::error!("Shader program setup failed: {}", err);
            JsValue::from_str(&err)
        })?;

        let mut app = PongApp::new(&GameConfig::default());
        app.init();
        Ok(PongWasm { app, renderer })
    }

    /// One frame: advance the simulation and redraw.
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.app.update();
        self.app.draw(&mut self.renderer);
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.app.reset();
    }

    #[wasm_bindgen]
    pub fn set_key(&mut self, evt: KeyboardEvent, pressed: bool) {
        self.app.handle_key_event(&evt.key(), pressed);
    }

    #[wasm_bindgen]
    pub fn focus_lost(&mut self) {
        self.app.focus_lost();
    }
}

/// Start the game on `canvas_id` and keep it running on every animation frame.
#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Already installed when `run` is called a second time on the same page.
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("window has no document")?;
    let game = Rc::new(RefCell::new(PongWasm::new(canvas_id)?));

    for (event, pressed) in [("keydown", true), ("keyup", false)] {
        let game = game.clone();
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |evt: KeyboardEvent| {
            game.borrow_mut().set_key(evt, pressed);
        });
        document.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }

    {
        let game = game.clone();
        let on_blur = Closure::<dyn FnMut()>::new(move || game.borrow_mut().focus_lost());
        window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
        on_blur.forget();
    }

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let loop_window = window.clone();
    *frame.borrow_mut() = Some(Closure::new(move || {
        game.borrow_mut().tick();
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, callback) {
                log::error!("requestAnimationFrame failed: {:?}", err);
            }
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_animation_frame(&window, callback)?;
    }
    Ok(())
}

fn request_animation_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}
