//! WebGL2 renderer for the galaxy scene.
//!
//! Three programs cover the whole inventory: attenuated round point sprites
//! (star fields and comets), an indexed unit sphere (moon and glow shell),
//! and a textured quad (text billboards and emoji sprites). All geometry is
//! uploaded once; only the comet points are rebuilt per frame.

use glam::{Mat4, Vec3};
use js_sys::Float32Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlTexture, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::camera::OrbitCamera;
use crate::config;
use crate::scene::Scene;

const SPHERE_RINGS: u32 = 32;
const SPHERE_SEGMENTS: u32 = 48;
/// Rendered diameter of a twinkle star, world units.
const TWINKLE_POINT_SIZE: f32 = 4.0;
/// Floats per comet point: pos3 + rgba4 + size1.
const COMET_STRIDE: usize = 8;

const POINT_VS: &str = r##"#version 300 es
layout(location = 0) in vec3 a_pos;
layout(location = 1) in vec4 a_color;
layout(location = 2) in float a_size;
uniform mat4 u_proj;
uniform mat4 u_view;
uniform mat4 u_model;
uniform float u_scale;
uniform float u_opacity;
out vec4 v_color;
void main() {
    vec4 view_pos = u_view * u_model * vec4(a_pos, 1.0);
    gl_Position = u_proj * view_pos;
    gl_PointSize = clamp(a_size * u_scale / max(-view_pos.z, 1.0), 0.5, 64.0);
    v_color = vec4(a_color.rgb, a_color.a * u_opacity);
}
"##;

const POINT_FS: &str = r##"#version 300 es
precision mediump float;
in vec4 v_color;
out vec4 o_color;
void main() {
    vec2 d = gl_PointCoord * 2.0 - 1.0;
    float r2 = dot(d, d);
    if (r2 > 1.0) {
        discard;
    }
    float fade = 1.0 - smoothstep(0.25, 1.0, r2);
    o_color = vec4(v_color.rgb, v_color.a * fade);
}
"##;

const MESH_VS: &str = r##"#version 300 es
layout(location = 0) in vec3 a_pos;
layout(location = 1) in vec2 a_uv;
uniform mat4 u_proj;
uniform mat4 u_view;
uniform mat4 u_model;
out vec2 v_uv;
void main() {
    gl_Position = u_proj * u_view * u_model * vec4(a_pos, 1.0);
    v_uv = a_uv;
}
"##;

const MESH_FS: &str = r##"#version 300 es
precision mediump float;
in vec2 v_uv;
uniform vec4 u_color;
uniform sampler2D u_tex;
uniform int u_textured;
out vec4 o_color;
void main() {
    vec4 base = u_textured == 1 ? texture(u_tex, v_uv) : vec4(1.0);
    o_color = base * u_color;
}
"##;

const QUAD_VS: &str = r##"#version 300 es
layout(location = 0) in vec2 a_corner;
uniform mat4 u_proj;
uniform mat4 u_view;
uniform mat4 u_model;
uniform int u_billboard;
uniform vec3 u_center;
uniform vec2 u_size;
out vec2 v_uv;
void main() {
    v_uv = vec2(a_corner.x + 0.5, 0.5 - a_corner.y);
    if (u_billboard == 1) {
        // Camera-plane facing sprite: offset in view space.
        vec4 view_pos = u_view * vec4(u_center, 1.0);
        view_pos.xy += a_corner * u_size;
        gl_Position = u_proj * view_pos;
    } else {
        gl_Position = u_proj * u_view * u_model * vec4(a_corner, 0.0, 1.0);
    }
}
"##;

const QUAD_FS: &str = r##"#version 300 es
precision mediump float;
in vec2 v_uv;
uniform sampler2D u_tex;
uniform vec4 u_color;
uniform int u_additive;
out vec4 o_color;
void main() {
    vec4 base = texture(u_tex, v_uv) * u_color;
    if (u_additive == 1) {
        // Premultiply so ONE/ONE blending leaves black texels invisible.
        o_color = vec4(base.rgb * base.a, 1.0);
    } else {
        o_color = base;
    }
}
"##;

struct PointUniforms {
    proj: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    scale: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
}

struct MeshUniforms {
    proj: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    textured: Option<WebGlUniformLocation>,
}

struct QuadUniforms {
    proj: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    billboard: Option<WebGlUniformLocation>,
    center: Option<WebGlUniformLocation>,
    size: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    additive: Option<WebGlUniformLocation>,
}

pub struct Renderer {
    canvas: HtmlCanvasElement,
    gl: GL,

    point_program: WebGlProgram,
    point_uniforms: PointUniforms,
    mesh_program: WebGlProgram,
    mesh_uniforms: MeshUniforms,
    quad_program: WebGlProgram,
    quad_uniforms: QuadUniforms,

    starfield_vao: WebGlVertexArrayObject,
    twinkle_vao: WebGlVertexArrayObject,
    comet_vao: WebGlVertexArrayObject,
    comet_buffer: WebGlBuffer,
    comet_data: Vec<f32>,

    sphere_vao: WebGlVertexArrayObject,
    sphere_index_count: i32,
    quad_vao: WebGlVertexArrayObject,

    moon_texture: Option<usize>,
    textures: Vec<WebGlTexture>,
}

impl Renderer {
    /// Create the renderer and upload all static geometry. Failing to acquire
    /// a WebGL2 context is fatal to scene construction.
    pub fn new(canvas: HtmlCanvasElement, scene: &Scene) -> Result<Self, JsValue> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        gl.enable(GL::DEPTH_TEST);
        gl.enable(GL::BLEND);
        gl.disable(GL::CULL_FACE);

        let point_program = link_program(&gl, POINT_VS, POINT_FS)?;
        let point_uniforms = PointUniforms {
            proj: gl.get_uniform_location(&point_program, "u_proj"),
            view: gl.get_uniform_location(&point_program, "u_view"),
            model: gl.get_uniform_location(&point_program, "u_model"),
            scale: gl.get_uniform_location(&point_program, "u_scale"),
            opacity: gl.get_uniform_location(&point_program, "u_opacity"),
        };

        let mesh_program = link_program(&gl, MESH_VS, MESH_FS)?;
        let mesh_uniforms = MeshUniforms {
            proj: gl.get_uniform_location(&mesh_program, "u_proj"),
            view: gl.get_uniform_location(&mesh_program, "u_view"),
            model: gl.get_uniform_location(&mesh_program, "u_model"),
            color: gl.get_uniform_location(&mesh_program, "u_color"),
            textured: gl.get_uniform_location(&mesh_program, "u_textured"),
        };
        gl.use_program(Some(&mesh_program));
        gl.uniform1i(gl.get_uniform_location(&mesh_program, "u_tex").as_ref(), 0);

        let quad_program = link_program(&gl, QUAD_VS, QUAD_FS)?;
        let quad_uniforms = QuadUniforms {
            proj: gl.get_uniform_location(&quad_program, "u_proj"),
            view: gl.get_uniform_location(&quad_program, "u_view"),
            model: gl.get_uniform_location(&quad_program, "u_model"),
            billboard: gl.get_uniform_location(&quad_program, "u_billboard"),
            center: gl.get_uniform_location(&quad_program, "u_center"),
            size: gl.get_uniform_location(&quad_program, "u_size"),
            color: gl.get_uniform_location(&quad_program, "u_color"),
            additive: gl.get_uniform_location(&quad_program, "u_additive"),
        };
        gl.use_program(Some(&quad_program));
        gl.uniform1i(gl.get_uniform_location(&quad_program, "u_tex").as_ref(), 0);

        let starfield_vao = upload_starfield(&gl, scene)?;
        let twinkle_vao = upload_twinkle(&gl, scene)?;

        let comet_vao = gl.create_vertex_array().ok_or("failed to create VAO")?;
        gl.bind_vertex_array(Some(&comet_vao));
        let comet_buffer = gl.create_buffer().ok_or("failed to create buffer")?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&comet_buffer));
        let stride = (COMET_STRIDE * 4) as i32;
        gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, stride, 0);
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(1, 4, GL::FLOAT, false, stride, 12);
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(2, 1, GL::FLOAT, false, stride, 28);
        gl.enable_vertex_attrib_array(2);

        let (sphere_vao, sphere_index_count) = upload_sphere(&gl)?;
        let quad_vao = upload_quad(&gl)?;
        gl.bind_vertex_array(None);

        let comet_capacity =
            config::COMET_SLOTS * (config::COMET_TAIL_SEGMENTS + 1) * COMET_STRIDE;

        Ok(Self {
            canvas,
            gl,
            point_program,
            point_uniforms,
            mesh_program,
            mesh_uniforms,
            quad_program,
            quad_uniforms,
            starfield_vao,
            twinkle_vao,
            comet_vao,
            comet_buffer,
            comet_data: Vec::with_capacity(comet_capacity),
            sphere_vao,
            sphere_index_count,
            quad_vao,
            moon_texture: None,
            textures: Vec::new(),
        })
    }

    /// Register a canvas as a texture; returns its slot for later draws.
    pub fn add_canvas_texture(&mut self, canvas: &HtmlCanvasElement) -> Result<usize, JsValue> {
        let gl = &self.gl;
        let texture = gl.create_texture().ok_or("failed to create texture")?;
        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
        gl.tex_image_2d_with_u32_and_u32_and_html_canvas_element(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            canvas,
        )?;
        self.textures.push(texture);
        Ok(self.textures.len() - 1)
    }

    pub fn set_moon_texture(&mut self, slot: usize) {
        self.moon_texture = Some(slot);
    }

    /// Submit one frame.
    pub fn draw(&mut self, scene: &Scene, camera: &OrbitCamera) {
        let gl = &self.gl;
        let width = self.canvas.width() as i32;
        let height = self.canvas.height() as i32;
        gl.viewport(0, 0, width, height);
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.depth_mask(true);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let proj = camera.projection_matrix().to_cols_array();
        let view = camera.view_matrix().to_cols_array();
        // Pixels per world unit at view depth 1.
        let fov = config::CAMERA_FOV_DEG.to_radians();
        let point_scale = height as f32 / (2.0 * (fov * 0.5).tan());

        self.draw_moon(scene, &proj, &view);
        self.draw_points(scene, &proj, &view, point_scale);
        self.draw_text(scene, &proj, &view);

        self.gl.depth_mask(true);
    }

    fn draw_moon(&self, scene: &Scene, proj: &[f32; 16], view: &[f32; 16]) {
        let gl = &self.gl;
        gl.use_program(Some(&self.mesh_program));
        gl.uniform_matrix4fv_with_f32_array(self.mesh_uniforms.proj.as_ref(), false, proj);
        gl.uniform_matrix4fv_with_f32_array(self.mesh_uniforms.view.as_ref(), false, view);
        gl.bind_vertex_array(Some(&self.sphere_vao));
        gl.blend_func(GL::ONE, GL::ONE);

        // Moon body: textured, depth-writing.
        let model = Mat4::from_rotation_y(scene.moon.rotation)
            * Mat4::from_scale(Vec3::splat(config::MOON_RADIUS));
        gl.uniform_matrix4fv_with_f32_array(
            self.mesh_uniforms.model.as_ref(),
            false,
            &model.to_cols_array(),
        );
        gl.uniform4f(self.mesh_uniforms.color.as_ref(), 1.0, 1.0, 1.0, 1.0);
        if let Some(slot) = self.moon_texture {
            gl.active_texture(GL::TEXTURE0);
            gl.bind_texture(GL::TEXTURE_2D, Some(&self.textures[slot]));
            gl.uniform1i(self.mesh_uniforms.textured.as_ref(), 1);
        } else {
            gl.uniform1i(self.mesh_uniforms.textured.as_ref(), 0);
            gl.uniform4f(self.mesh_uniforms.color.as_ref(), 0.6, 0.6, 0.6, 1.0);
        }
        gl.draw_elements_with_i32(GL::TRIANGLES, self.sphere_index_count, GL::UNSIGNED_SHORT, 0);

        // Glow shell: translucent, breathing, no depth writes.
        gl.depth_mask(false);
        let glow = Mat4::from_rotation_y(scene.moon.glow_rotation)
            * Mat4::from_scale(Vec3::splat(config::GLOW_RADIUS * scene.moon.glow_scale));
        gl.uniform_matrix4fv_with_f32_array(
            self.mesh_uniforms.model.as_ref(),
            false,
            &glow.to_cols_array(),
        );
        gl.uniform1i(self.mesh_uniforms.textured.as_ref(), 0);
        let [r, g, b] = config::GLOW_COLOR;
        gl.uniform4f(self.mesh_uniforms.color.as_ref(), r, g, b, config::GLOW_OPACITY);
        gl.draw_elements_with_i32(GL::TRIANGLES, self.sphere_index_count, GL::UNSIGNED_SHORT, 0);
    }

    fn draw_points(&mut self, scene: &Scene, proj: &[f32; 16], view: &[f32; 16], scale: f32) {
        let gl = &self.gl;
        gl.use_program(Some(&self.point_program));
        gl.uniform_matrix4fv_with_f32_array(self.point_uniforms.proj.as_ref(), false, proj);
        gl.uniform_matrix4fv_with_f32_array(self.point_uniforms.view.as_ref(), false, view);
        gl.uniform1f(self.point_uniforms.scale.as_ref(), scale);
        gl.depth_mask(false);

        // Main star field rotates as a whole.
        let model = Mat4::from_rotation_y(scene.starfield.spin).to_cols_array();
        gl.uniform_matrix4fv_with_f32_array(self.point_uniforms.model.as_ref(), false, &model);
        gl.uniform1f(self.point_uniforms.opacity.as_ref(), 0.9);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.bind_vertex_array(Some(&self.starfield_vao));
        gl.draw_arrays(GL::POINTS, 0, scene.starfield.len() as i32);

        // Twinkle overlay: static positions, shared oscillating opacity.
        let identity = Mat4::IDENTITY.to_cols_array();
        gl.uniform_matrix4fv_with_f32_array(self.point_uniforms.model.as_ref(), false, &identity);
        gl.uniform1f(self.point_uniforms.opacity.as_ref(), scene.twinkle.opacity);
        gl.blend_func(GL::ONE, GL::ONE);
        gl.bind_vertex_array(Some(&self.twinkle_vao));
        gl.vertex_attrib4f(1, 1.0, 1.0, 1.0, 1.0);
        gl.vertex_attrib1f(2, TWINKLE_POINT_SIZE);
        gl.draw_arrays(GL::POINTS, 0, (scene.twinkle.positions.len() / 3) as i32);

        // Comets: nucleus plus fading tail, rebuilt every frame.
        self.comet_data.clear();
        for comet in &scene.comets {
            push_point(
                &mut self.comet_data,
                comet.pos,
                config::COMET_NUCLEUS_COLOR,
                1.0,
                config::COMET_NUCLEUS_SIZE * 2.0,
            );
            for i in 0..config::COMET_TAIL_SEGMENTS {
                let (center, size, alpha) = comet.tail_segment(i);
                push_point(
                    &mut self.comet_data,
                    center,
                    config::COMET_TAIL_COLOR,
                    alpha,
                    size * 2.0,
                );
            }
        }
        gl.uniform_matrix4fv_with_f32_array(self.point_uniforms.model.as_ref(), false, &identity);
        gl.uniform1f(self.point_uniforms.opacity.as_ref(), 1.0);
        gl.bind_vertex_array(Some(&self.comet_vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.comet_buffer));
        unsafe {
            let view_arr = Float32Array::view(&self.comet_data);
            gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view_arr, GL::DYNAMIC_DRAW);
        }
        gl.draw_arrays(GL::POINTS, 0, (self.comet_data.len() / COMET_STRIDE) as i32);
    }

    fn draw_text(&self, scene: &Scene, proj: &[f32; 16], view: &[f32; 16]) {
        let Some(text) = &scene.text else {
            // Font not resolved yet; the scene renders without text.
            return;
        };
        let gl = &self.gl;
        gl.use_program(Some(&self.quad_program));
        gl.uniform_matrix4fv_with_f32_array(self.quad_uniforms.proj.as_ref(), false, proj);
        gl.uniform_matrix4fv_with_f32_array(self.quad_uniforms.view.as_ref(), false, view);
        gl.bind_vertex_array(Some(&self.quad_vao));
        gl.active_texture(GL::TEXTURE0);

        // Text billboards: pink, additive, CPU-oriented toward the camera.
        gl.uniform1i(self.quad_uniforms.billboard.as_ref(), 0);
        gl.uniform1i(self.quad_uniforms.additive.as_ref(), 1);
        gl.blend_func(GL::ONE, GL::ONE);
        let [r, g, b] = config::TEXT_COLOR;
        gl.uniform4f(self.quad_uniforms.color.as_ref(), r, g, b, 1.0);
        for board in text.billboards() {
            let Some(texture) = self.textures.get(board.texture) else {
                continue;
            };
            gl.bind_texture(GL::TEXTURE_2D, Some(texture));
            let model = Mat4::from_translation(board.pos)
                * board.orientation
                * Mat4::from_scale(Vec3::new(board.height * board.aspect, board.height, 1.0));
            gl.uniform_matrix4fv_with_f32_array(
                self.quad_uniforms.model.as_ref(),
                false,
                &model.to_cols_array(),
            );
            gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
        }

        // Emoji sprites: camera-plane facing in the shader, normal blending.
        gl.uniform1i(self.quad_uniforms.billboard.as_ref(), 1);
        gl.uniform1i(self.quad_uniforms.additive.as_ref(), 0);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.uniform4f(self.quad_uniforms.color.as_ref(), 1.0, 1.0, 1.0, 1.0);
        for sprite in &text.sprites {
            let Some(texture) = self.textures.get(sprite.texture) else {
                continue;
            };
            gl.bind_texture(GL::TEXTURE_2D, Some(texture));
            gl.uniform3f(
                self.quad_uniforms.center.as_ref(),
                sprite.pos.x,
                sprite.pos.y,
                sprite.pos.z,
            );
            gl.uniform2f(self.quad_uniforms.size.as_ref(), sprite.size, sprite.size);
            gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
        }
    }
}

fn push_point(data: &mut Vec<f32>, pos: Vec3, color: [f32; 3], alpha: f32, size: f32) {
    data.extend_from_slice(&[
        pos.x, pos.y, pos.z, color[0], color[1], color[2], alpha, size,
    ]);
}

fn upload_starfield(gl: &GL, scene: &Scene) -> Result<WebGlVertexArrayObject, JsValue> {
    let vao = gl.create_vertex_array().ok_or("failed to create VAO")?;
    gl.bind_vertex_array(Some(&vao));

    upload_static_f32(gl, &scene.starfield.positions)?;
    gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(0);

    // Expand rgb to rgba once at upload time.
    let mut rgba = Vec::with_capacity(scene.starfield.len() * 4);
    for rgb in scene.starfield.colors.chunks_exact(3) {
        rgba.extend_from_slice(rgb);
        rgba.push(1.0);
    }
    upload_static_f32(gl, &rgba)?;
    gl.vertex_attrib_pointer_with_i32(1, 4, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(1);

    upload_static_f32(gl, &scene.starfield.sizes)?;
    gl.vertex_attrib_pointer_with_i32(2, 1, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(2);

    gl.bind_vertex_array(None);
    Ok(vao)
}

fn upload_twinkle(gl: &GL, scene: &Scene) -> Result<WebGlVertexArrayObject, JsValue> {
    let vao = gl.create_vertex_array().ok_or("failed to create VAO")?;
    gl.bind_vertex_array(Some(&vao));
    upload_static_f32(gl, &scene.twinkle.positions)?;
    gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(0);
    // Color and size come from constant attributes at draw time.
    gl.bind_vertex_array(None);
    Ok(vao)
}

/// Create and fill a STATIC_DRAW buffer, leaving it bound.
fn upload_static_f32(gl: &GL, data: &[f32]) -> Result<WebGlBuffer, JsValue> {
    let buffer = gl.create_buffer().ok_or("failed to create buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    unsafe {
        let view = Float32Array::view(data);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
    }
    Ok(buffer)
}

/// Indexed lat/long unit sphere with uv coordinates.
fn upload_sphere(gl: &GL) -> Result<(WebGlVertexArrayObject, i32), JsValue> {
    let mut vertices: Vec<f32> = Vec::new();
    for ring in 0..=SPHERE_RINGS {
        let v = ring as f32 / SPHERE_RINGS as f32;
        let theta = v * std::f32::consts::PI;
        for seg in 0..=SPHERE_SEGMENTS {
            let u = seg as f32 / SPHERE_SEGMENTS as f32;
            let phi = u * std::f32::consts::TAU;
            vertices.extend_from_slice(&[
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
                u,
                v,
            ]);
        }
    }

    let cols = SPHERE_SEGMENTS + 1;
    let mut indices: Vec<u16> = Vec::new();
    for ring in 0..SPHERE_RINGS {
        for seg in 0..SPHERE_SEGMENTS {
            let a = (ring * cols + seg) as u16;
            let b = a + cols as u16;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    let vao = gl.create_vertex_array().ok_or("failed to create VAO")?;
    gl.bind_vertex_array(Some(&vao));
    upload_static_f32(gl, &vertices)?;
    gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, 20, 0);
    gl.enable_vertex_attrib_array(0);
    gl.vertex_attrib_pointer_with_i32(1, 2, GL::FLOAT, false, 20, 12);
    gl.enable_vertex_attrib_array(1);

    let index_buffer = gl.create_buffer().ok_or("failed to create buffer")?;
    gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
    unsafe {
        let view = js_sys::Uint16Array::view(&indices);
        gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &view, GL::STATIC_DRAW);
    }
    gl.bind_vertex_array(None);
    Ok((vao, indices.len() as i32))
}

/// Unit quad in the xy plane, drawn as a triangle strip.
fn upload_quad(gl: &GL) -> Result<WebGlVertexArrayObject, JsValue> {
    let vao = gl.create_vertex_array().ok_or("failed to create VAO")?;
    gl.bind_vertex_array(Some(&vao));
    let corners: [f32; 8] = [-0.5, -0.5, 0.5, -0.5, -0.5, 0.5, 0.5, 0.5];
    upload_static_f32(gl, &corners)?;
    gl.vertex_attrib_pointer_with_i32(0, 2, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(0);
    gl.bind_vertex_array(None);
    Ok(vao)
}

fn link_program(gl: &GL, vertex_src: &str, fragment_src: &str) -> Result<WebGlProgram, JsValue> {
    let vertex = compile_shader(gl, GL::VERTEX_SHADER, vertex_src)?;
    let fragment = compile_shader(gl, GL::FRAGMENT_SHADER, fragment_src)?;
    let program = gl.create_program().ok_or("failed to create program")?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));
        Ok(program)
    } else {
        let info = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown program error".to_string());
        Err(format!("failed to link program: {info}").into())
    }
}

fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(shader_type).ok_or("failed to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown shader error".to_string());
        Err(format!("failed to compile shader: {info}").into())
    }
}
